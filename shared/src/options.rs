//! # Ring Options
//!
//! Caller-facing option objects. Every field is optional; absent keys fall
//! back to the documented defaults when a [`RingConfig`](crate::RingConfig)
//! is derived. Field names on the wire are the widget's established option
//! keys (`SVGWidth`, `innerNumber`, `strokeColor`, `circleR`, ...).

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{Result, RingError};
use crate::style::{style_value, StyleMap};

pub const DEFAULT_STROKE_COLOR: &str = "#006363";
pub const DEFAULT_STROKE_WIDTH: &str = "20px";
pub const DEFAULT_CIRCLE_CX: f64 = 110.0;
pub const DEFAULT_CIRCLE_CY: f64 = 110.0;
pub const DEFAULT_CIRCLE_R: f64 = 100.0;

pub const DEFAULT_SVG_WIDTH: f64 = 200.0;
pub const DEFAULT_SVG_HEIGHT: f64 = 200.0;
pub const DEFAULT_INNER_NUMBER: f64 = 75.0;
pub const DEFAULT_SPEED_MS: f64 = 2000.0;

pub const DEFAULT_FONT_WEIGHT: &str = "800";
pub const DEFAULT_FONT_SIZE: &str = "50px";

/// Outer panel options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    #[serde(rename = "SVGWidth", default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub svg_width: Option<f64>,
    #[serde(rename = "SVGHeight", default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub svg_height: Option<f64>,
    /// Target percent, also painted as the label's first text
    #[serde(rename = "innerNumber", default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub inner_number: Option<f64>,
    /// Animation duration in milliseconds
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub speed: Option<f64>,
}

/// Circle stroke options
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SvgCircleOptions {
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_string")]
    pub stroke_color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_string")]
    pub stroke_width: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub circle_cx: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub circle_cy: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "loose_number")]
    pub circle_r: Option<f64>,
}

/// The three partial option objects a ring is built from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RingOptions {
    #[serde(default)]
    pub svg_options: SvgOptions,
    #[serde(default)]
    pub svg_circle_options: SvgCircleOptions,
    /// Arbitrary label CSS; `color`, `fontWeight` and `fontSize` have defaults
    #[serde(default)]
    pub inner_number_styles: StyleMap,
}

impl RingOptions {
    /// Decode `{"svgOptions": {...}, "svgCircleOptions": {...}, "innerNumberStyles": {...}}`.
    /// Any of the three objects may be omitted.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| RingError::InvalidConfig(e.to_string()))
    }

    /// Decode the three option objects from separate JSON documents, as a host
    /// passing them positionally would. `None` means "use the defaults".
    pub fn from_json_parts(
        svg_options: Option<&str>,
        svg_circle_options: Option<&str>,
        inner_number_styles: Option<&str>,
    ) -> Result<Self> {
        fn part<T: for<'de> Deserialize<'de> + Default>(json: Option<&str>, name: &str) -> Result<T> {
            match json {
                Some(json) => serde_json::from_str(json)
                    .map_err(|e| RingError::InvalidConfig(format!("{}: {}", name, e))),
                None => Ok(T::default()),
            }
        }

        Ok(Self {
            svg_options: part(svg_options, "svgOptions")?,
            svg_circle_options: part(svg_circle_options, "svgCircleOptions")?,
            inner_number_styles: part(inner_number_styles, "innerNumberStyles")?,
        })
    }

    /// Shorthand for overriding only the target percent
    pub fn with_target(mut self, percent: f64) -> Self {
        self.svg_options.inner_number = Some(percent);
        self
    }
}

/// Numbers as given; strings and booleans coerced the way a script host
/// would (`"60"` is 60, `""` is 0, anything unparsable is NaN). `null` is
/// treated as absent.
fn loose_number<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<f64>, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::Number(n)) => Ok(n.as_f64()),
        Some(serde_json::Value::String(s)) => {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                Ok(Some(0.0))
            } else {
                Ok(Some(trimmed.parse().unwrap_or(f64::NAN)))
            }
        }
        Some(serde_json::Value::Bool(b)) => Ok(Some(if b { 1.0 } else { 0.0 })),
        Some(other) => Err(D::Error::custom(format!("expected a number, got {}", other))),
    }
}

/// Any scalar, written out the way it lands in an attribute
fn loose_string<'de, D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Option<String>, D::Error> {
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(value @ (serde_json::Value::Array(_) | serde_json::Value::Object(_))) => Err(
            D::Error::custom(format!("expected a string or number, got {}", value)),
        ),
        Some(value) => Ok(Some(style_value(&value))),
    }
}
