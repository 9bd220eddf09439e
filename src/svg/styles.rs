//! Label metrics and shape constants.
//!
//! Labels are drawn in the browser's monospace font, so width is a flat
//! per-character estimate.

/// Label text metrics (in px)
pub struct LabelMetrics;

impl LabelMetrics {
    pub const CHAR_WIDTH: f64 = 8.0;
    pub const LINE_HEIGHT: f64 = 15.0;
    pub const FONT_FAMILY: &'static str = "monospace";
}

/// Corner radius of a `round` swatch is its size divided by this.
pub const ROUND_RADIUS_DIVISOR: f64 = 5.0;

pub const SVG_NS: &str = "http://www.w3.org/2000/svg";
pub const XLINK_NS: &str = "http://www.w3.org/1999/xlink";

/// Media type of every rendered swatch.
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml";
