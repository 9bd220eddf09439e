//! SVG renderer - converts a SwatchRequest into an SVG string.
//!
//! Pure string building, no DOM manipulation. Exactly one shape is emitted,
//! chosen by the style and whether a label is present.

use super::styles::{LabelMetrics, SVG_NS, XLINK_NS};
use crate::types::{SwatchRequest, SwatchStyle};

/// Render a resolved swatch request as an SVG document.
pub fn render_swatch_svg(req: &SwatchRequest) -> String {
    let width = req.width();
    let height = req.height();

    let shape = match (req.style, req.has_text()) {
        (SwatchStyle::Circle, false) => render_circle(req),
        (SwatchStyle::Circle, true) => render_circle_label(req, width, height),
        (_, false) => render_rect(req, width, height),
        (_, true) => render_rect_label(req, width, height),
    };

    format!("{}{}</svg>", svg_open_tag(width, height), shape)
}

/// Build the SVG opening tag declaring both namespaces.
fn svg_open_tag(width: f64, height: f64) -> String {
    let w = fmt_num(width);
    let h = fmt_num(height);
    format!(
        "<svg xmlns='{}' xmlns:xlink='{}' width='{}' height='{}' viewBox='0 0 {} {}'>",
        SVG_NS, XLINK_NS, w, h, w, h
    )
}

// ============================================================================
// Shapes
// ============================================================================

fn render_rect(req: &SwatchRequest, width: f64, height: f64) -> String {
    format!(
        "<rect fill='{}' x='{}' y='{}' width='{}' height='{}' rx='{}'/>",
        req.color,
        fmt_num(req.left),
        fmt_num(req.top),
        fmt_num(width),
        fmt_num(height),
        fmt_num(req.corner_radius())
    )
}

// The label fills the whole box, so padding only grows the rect.
fn render_rect_label(req: &SwatchRequest, width: f64, height: f64) -> String {
    let rect = format!(
        "<rect fill='{}' x='0' y='0' width='{}' height='{}' rx='{}'/>",
        req.color,
        fmt_num(width),
        fmt_num(height),
        fmt_num(req.corner_radius())
    );
    format!("{}{}", rect, render_label(req, width / 2.0, height / 2.0))
}

fn render_circle(req: &SwatchRequest) -> String {
    let half = req.size / 2.0;
    format!(
        "<circle fill='{}' cx='{}' cy='{}' r='{}'/>",
        req.color,
        fmt_num(req.left + half),
        fmt_num(req.top + half),
        fmt_num(half)
    )
}

fn render_circle_label(req: &SwatchRequest, width: f64, height: f64) -> String {
    let rect = format!(
        "<rect fill='{}' x='0' y='0' width='{}' height='{}' rx='{}'/>",
        req.color,
        fmt_num(req.size),
        fmt_num(req.size),
        fmt_num(width / 2.0)
    );
    let label = render_label(req, req.left + req.size / 2.0, height / 2.0);
    format!("{}{}", rect, label)
}

fn render_label(req: &SwatchRequest, x: f64, y: f64) -> String {
    format!(
        "<text x='{}' y='{}' fill='{}' font-family='{}' dominant-baseline='middle' text-anchor='middle'>{}</text>",
        fmt_num(x),
        fmt_num(y),
        req.text_color,
        LabelMetrics::FONT_FAMILY,
        escape_xml(&req.text)
    )
}

// ============================================================================
// Helpers
// ============================================================================

/// Escape XML special characters
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a number the way JavaScript's number-to-string does.
///
/// Whole numbers have no decimal point, non-finite values print as
/// `NaN`/`Infinity`, and magnitudes outside `[1e-6, 1e21)` use exponent form.
pub fn fmt_num(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    // Also catches -0
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if (1e-6..1e21).contains(&abs) {
        return format!("{}", n);
    }

    let s = format!("{:e}", n);
    match s.split_once('e') {
        Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
        _ => s,
    }
}
