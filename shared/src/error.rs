use thiserror::Error;

/// Errors raised while building or mounting a progress ring
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RingError {
    /// The selector (or one of the ring's own inserted elements) matched nothing
    #[error("No element matches selector '{selector}'")]
    ElementNotFound { selector: String },
    /// Options could not be decoded, or failed explicit validation
    #[error("Invalid ring configuration: {0}")]
    InvalidConfig(String),
    /// The host DOM rejected an operation
    #[error("DOM operation failed: {0}")]
    Dom(String),
}

impl RingError {
    pub fn not_found(selector: impl Into<String>) -> Self {
        RingError::ElementNotFound {
            selector: selector.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RingError>;
