//! # Progress Ring Widget
//!
//! Binds one [`RingConfig`] to one root node. Initialization renders the
//! markup, applies inline styles and starts two fire-and-forget animations
//! sharing the configured duration:
//!
//! - **Counter**: the label text counts up to the target percent
//! - **Reveal**: the circle's `stroke-dashoffset` shrinks from the full
//!   circumference to the target offset
//!
//! The two animations write to disjoint elements and never coordinate.

use log::{debug, warn};

use crate::animation::{Animator, Tween};
use crate::config::RingConfig;
use crate::dom::Dom;
use crate::error::{Result, RingError};
use crate::markup::{self, circle_selector, label_selector};
use crate::options::RingOptions;

/// One animated progress ring mounted on a root node
pub struct ProgressRing<D: Dom, A: Animator> {
    dom: D,
    animator: A,
    root: D::Node,
    config: RingConfig,
}

impl<D, A> ProgressRing<D, A>
where
    D: Dom + Clone + 'static,
    A: Animator,
{
    /// Look up `selector`, build the ring on it and start animating.
    ///
    /// Fails with [`RingError::ElementNotFound`] before touching the document
    /// when nothing matches.
    pub fn new(selector: &str, options: &RingOptions, dom: D, animator: A) -> Result<Self> {
        let root = dom
            .query_selector(selector)?
            .ok_or_else(|| RingError::not_found(selector))?;
        debug!("Mounting progress ring on '{}'", selector);
        Self::attach(root, options, dom, animator)
    }

    /// Build the ring on an already resolved node and start animating
    pub fn attach(root: D::Node, options: &RingOptions, dom: D, animator: A) -> Result<Self> {
        let ring = Self {
            dom,
            animator,
            root,
            config: RingConfig::from_options(options),
        };
        ring.init()?;
        Ok(ring)
    }

    pub fn config(&self) -> &RingConfig {
        &self.config
    }

    /// Render, style and animate from scratch.
    ///
    /// Replaces whatever the root currently holds, so calling it again
    /// restarts both animations from the beginning.
    pub fn init(&self) -> Result<()> {
        let html = markup::render(&self.config);
        self.dom.set_inner_html(&self.root, &html)?;
        self.dom.apply_styles(&self.root, &self.config.root_style())?;

        let circle = self.find(&circle_selector())?;
        self.dom.apply_styles(&circle, &self.config.circle_style())?;

        let label = self.find(&label_selector())?;
        self.dom.apply_styles(&label, self.config.label_style())?;

        debug!(
            "Animating ring to {}% over {}ms (dashoffset {} -> {})",
            self.config.target_percent,
            self.config.duration_ms,
            self.config.dash_offset_initial(),
            self.config.dash_offset_target()
        );
        self.start_counter(label);
        self.start_reveal(circle);
        Ok(())
    }

    fn find(&self, selector: &str) -> Result<D::Node> {
        self.dom
            .query_within(&self.root, selector)?
            .ok_or_else(|| RingError::not_found(selector))
    }

    fn start_counter(&self, label: D::Node) {
        let tween = Tween::new(
            self.config.counter_start,
            self.config.target_percent,
            self.config.duration_ms,
        );
        let dom = self.dom.clone();
        self.animator.animate(
            tween,
            Box::new(move |value| {
                if let Err(e) = dom.set_text(&label, &markup::format_counter(value)) {
                    warn!("Failed to update ring label: {}", e);
                }
            }),
        );
    }

    fn start_reveal(&self, circle: D::Node) {
        let tween = Tween::new(
            self.config.dash_offset_initial(),
            self.config.dash_offset_target(),
            self.config.duration_ms,
        );
        let dom = self.dom.clone();
        self.animator.animate(
            tween,
            Box::new(move |value| {
                if let Err(e) = dom.set_style(&circle, "stroke-dashoffset", &value.to_string()) {
                    warn!("Failed to update ring stroke: {}", e);
                }
            }),
        );
    }
}
