//! # Progress Ring
//!
//! A circular progress indicator rendered as inline SVG. The stroke is
//! revealed with the dash-offset trick while a label counts up to the target
//! percent.
//!
//! The crate is host-agnostic: DOM access and frame scheduling are injected
//! through the [`Dom`] and [`Animator`] traits. The browser implementations
//! live in the frontend crate.
//!
//! ```ignore
//! let ring = ProgressRing::new(".circle-box", &RingOptions::default().with_target(60.0), dom, animator)?;
//! ```

pub mod animation;
pub mod config;
pub mod dom;
pub mod error;
pub mod geometry;
pub mod markup;
pub mod options;
pub mod ring;
pub mod style;

#[cfg(test)]
mod test_utils;

pub use animation::{swing, Animator, FrameCallback, SteppedAnimator, Tween};
pub use config::RingConfig;
pub use dom::Dom;
pub use error::{Result, RingError};
pub use options::{RingOptions, SvgCircleOptions, SvgOptions};
pub use ring::ProgressRing;
pub use style::StyleMap;
