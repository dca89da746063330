use gloo::console;
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Browser console logger, tagged by component.
///
/// Also serves as the `log` backend so records from the ring crate end up in
/// the same console.
pub struct Logger;

static LOGGER: Logger = Logger;

impl Logger {
    /// Install as the global `log` backend
    pub fn init(level: LevelFilter) -> anyhow::Result<()> {
        log::set_logger(&LOGGER)
            .map_err(|e| anyhow::anyhow!("Failed to install console logger: {}", e))?;
        log::set_max_level(level);
        Ok(())
    }

    pub fn debug_with_component(component: &str, message: &str) {
        Self::write(Level::Debug, message, Some(component));
    }

    pub fn info_with_component(component: &str, message: &str) {
        Self::write(Level::Info, message, Some(component));
    }

    pub fn warn_with_component(component: &str, message: &str) {
        Self::write(Level::Warn, message, Some(component));
    }

    pub fn error_with_component(component: &str, message: &str) {
        Self::write(Level::Error, message, Some(component));
    }

    fn write(level: Level, message: &str, component: Option<&str>) {
        let line = match component {
            Some(component) => format!("[{}] {}", component, message),
            None => message.to_string(),
        };
        match level {
            Level::Error => console::error!(line),
            Level::Warn => console::warn!(line),
            Level::Info => console::info!(line),
            Level::Debug | Level::Trace => console::debug!(line),
        }
    }
}

impl Log for Logger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            Self::write(record.level(), &record.args().to_string(), Some(record.target()));
        }
    }

    fn flush(&self) {}
}
