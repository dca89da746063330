//! Circle math for the stroke-dash progress trick.

use std::f64::consts::PI;

/// Full path length of a circle of radius `r`
pub fn circumference(radius: f64) -> f64 {
    2.0 * PI * radius
}

/// Dash offset that leaves `percent` of the stroke visible.
///
/// Only meaningful for `percent` in `0..=100`; other values give offsets
/// outside `[0, circumference]` and are returned unclamped.
pub fn dash_offset_for(circumference: f64, percent: f64) -> f64 {
    circumference - circumference / 100.0 * percent
}
