//! Markup templates for the ring and its label.
//!
//! Class names here are part of the public contract: stylesheets and the
//! widget's own element lookups both depend on them.

use crate::config::{RingConfig, CIRCLE_FILL};

pub const CIRCLE_CLASS: &str = "circle";
pub const LABEL_CLASS: &str = "svg-number";
pub const VIEW_BOX: &str = "0 0 220 220";

/// Selector for the inserted circle element
pub fn circle_selector() -> String {
    format!(".{}", CIRCLE_CLASS)
}

/// Selector for the inserted label element
pub fn label_selector() -> String {
    format!(".{}", LABEL_CLASS)
}

/// `<svg>` with a single fully hidden `<circle class="circle">`
pub fn render_svg(config: &RingConfig) -> String {
    format!(
        concat!(
            r#"<svg width="{width}" height="{height}" viewBox="{view_box}">"#,
            r#"<circle class="{class}" cx="{cx}" cy="{cy}" r="{r}" fill="{fill}" "#,
            r#"stroke-dasharray="{dasharray}" stroke-dashoffset="{dashoffset}" "#,
            r#"stroke="{stroke}" stroke-width="{stroke_width}"/>"#,
            "</svg>"
        ),
        width = config.width,
        height = config.height,
        view_box = VIEW_BOX,
        class = CIRCLE_CLASS,
        cx = config.center_x,
        cy = config.center_y,
        r = config.radius,
        fill = CIRCLE_FILL,
        dasharray = config.dash_array(),
        dashoffset = config.dash_offset_initial(),
        stroke = config.stroke_color,
        stroke_width = config.stroke_width,
    )
}

/// Label with the plain target number; the `%` only appears once the
/// counter animation writes its first frame
pub fn render_label(config: &RingConfig) -> String {
    format!(r#"<div class="{}">{}</div>"#, LABEL_CLASS, config.target_percent)
}

/// Everything the root node's content is replaced with
pub fn render(config: &RingConfig) -> String {
    let mut html = render_svg(config);
    html.push_str(&render_label(config));
    html
}

/// Text the counter writes for an interpolated value
pub fn format_counter(value: f64) -> String {
    format!("{}%", value.round())
}
