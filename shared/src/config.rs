//! # Ring Configuration
//!
//! [`RingConfig`] is the write-once result of merging caller options over the
//! defaults. Rendering and both animations only ever read it.

use crate::error::{Result, RingError};
use crate::geometry::{circumference, dash_offset_for};
use crate::options::{
    RingOptions, DEFAULT_CIRCLE_CX, DEFAULT_CIRCLE_CY, DEFAULT_CIRCLE_R, DEFAULT_FONT_SIZE,
    DEFAULT_FONT_WEIGHT, DEFAULT_INNER_NUMBER, DEFAULT_SPEED_MS, DEFAULT_STROKE_COLOR,
    DEFAULT_STROKE_WIDTH, DEFAULT_SVG_HEIGHT, DEFAULT_SVG_WIDTH,
};
use crate::style::StyleMap;

/// Fill used for the ring; the stroke alone carries the progress
pub const CIRCLE_FILL: &str = "none";

/// Fully merged, derived ring configuration
#[derive(Debug, Clone, PartialEq)]
pub struct RingConfig {
    pub stroke_color: String,
    pub stroke_width: String,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub width: f64,
    pub height: f64,
    pub target_percent: f64,
    pub duration_ms: f64,
    /// Where the label counter starts before counting up to `target_percent`
    pub counter_start: f64,
    circumference: f64,
    label_style: StyleMap,
}

impl RingConfig {
    /// Merge `options` over the defaults and derive the dash geometry.
    ///
    /// The circumference is always taken from the default radius, even when
    /// `circleR` is overridden. An overridden radius changes the drawn circle
    /// but not the dash math.
    pub fn from_options(options: &RingOptions) -> Self {
        let circle = &options.svg_circle_options;
        let svg = &options.svg_options;

        let stroke_color = circle
            .stroke_color
            .clone()
            .unwrap_or_else(|| DEFAULT_STROKE_COLOR.to_string());
        let width = svg.svg_width.unwrap_or(DEFAULT_SVG_WIDTH);

        let mut label_style = StyleMap::new()
            .with("color", stroke_color.clone())
            .with("fontWeight", DEFAULT_FONT_WEIGHT)
            .with("fontSize", DEFAULT_FONT_SIZE);
        label_style.merge(&options.inner_number_styles);
        label_style.merge(&fixed_label_style(width));

        Self {
            stroke_width: circle
                .stroke_width
                .clone()
                .unwrap_or_else(|| DEFAULT_STROKE_WIDTH.to_string()),
            center_x: circle.circle_cx.unwrap_or(DEFAULT_CIRCLE_CX),
            center_y: circle.circle_cy.unwrap_or(DEFAULT_CIRCLE_CY),
            radius: circle.circle_r.unwrap_or(DEFAULT_CIRCLE_R),
            stroke_color,
            width,
            height: svg.svg_height.unwrap_or(DEFAULT_SVG_HEIGHT),
            target_percent: svg.inner_number.unwrap_or(DEFAULT_INNER_NUMBER),
            duration_ms: svg.speed.unwrap_or(DEFAULT_SPEED_MS),
            counter_start: 0.0,
            circumference: circumference(DEFAULT_CIRCLE_R),
            label_style,
        }
    }

    pub fn circumference(&self) -> f64 {
        self.circumference
    }

    pub fn dash_array(&self) -> f64 {
        self.circumference
    }

    /// Offset before the reveal starts: the whole stroke hidden
    pub fn dash_offset_initial(&self) -> f64 {
        self.circumference
    }

    /// Offset the reveal animates to
    pub fn dash_offset_target(&self) -> f64 {
        dash_offset_for(self.circumference, self.target_percent)
    }

    pub fn label_style(&self) -> &StyleMap {
        &self.label_style
    }

    /// Styles for the ring's root node. The -90deg turn makes the stroke
    /// start at twelve o'clock and run clockwise.
    pub fn root_style(&self) -> StyleMap {
        StyleMap::new()
            .with("position", "relative")
            .with("display", "inline-block")
            .with("transform", "rotate(-90deg)")
    }

    /// Styles for the circle element: the panel options that map onto CSS
    pub fn circle_style(&self) -> StyleMap {
        StyleMap::new()
            .with("strokeDasharray", self.dash_array().to_string())
            .with("strokeDashoffset", self.dash_offset_initial().to_string())
            .with("fill", CIRCLE_FILL)
    }

    /// Opt-in range checks. Rendering never calls this; unchecked values are
    /// rendered as given.
    pub fn validate(&self) -> Result<()> {
        let numbers = [
            ("SVGWidth", self.width),
            ("SVGHeight", self.height),
            ("innerNumber", self.target_percent),
            ("speed", self.duration_ms),
            ("circleCx", self.center_x),
            ("circleCy", self.center_y),
            ("circleR", self.radius),
        ];
        if let Some((name, value)) = numbers.iter().find(|(_, value)| !value.is_finite()) {
            return Err(RingError::InvalidConfig(format!("{} must be finite, got {}", name, value)));
        }
        if !(0.0..=100.0).contains(&self.target_percent) {
            return Err(RingError::InvalidConfig(format!(
                "innerNumber must be between 0 and 100, got {}",
                self.target_percent
            )));
        }
        if self.duration_ms <= 0.0 {
            return Err(RingError::InvalidConfig(format!(
                "speed must be positive, got {}",
                self.duration_ms
            )));
        }
        if self.radius <= 0.0 {
            return Err(RingError::InvalidConfig(format!(
                "circleR must be positive, got {}",
                self.radius
            )));
        }
        Ok(())
    }
}

impl Default for RingConfig {
    fn default() -> Self {
        Self::from_options(&RingOptions::default())
    }
}

/// Positioning rules that always win over caller label styles
fn fixed_label_style(width: f64) -> StyleMap {
    StyleMap::new()
        .with("position", "absolute")
        .with("display", "inline-block")
        .with("left", "50%")
        .with("transform", "translate(-50%) rotate(90deg)")
        .with("lineHeight", format!("{}px", width))
}
