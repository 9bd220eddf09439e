//! Type definitions for swatch requests

use crate::color::normalize_color;
use crate::query::{parse_number, QueryParams};
use crate::svg::{LabelMetrics, ROUND_RADIUS_DIVISOR};

pub const DEFAULT_SIZE: &str = "20";
pub const DEFAULT_TEXT_COLOR: &str = "#FFF";

/// Shape family of the swatch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SwatchStyle {
    #[default]
    Square,
    Round,
    Circle,
}

impl SwatchStyle {
    /// Map an exact style name to its variant, or return `fallback`.
    ///
    /// Matching is case-sensitive; callers lowercase first.
    pub fn resolve(name: &str, fallback: SwatchStyle) -> SwatchStyle {
        match name {
            "square" => SwatchStyle::Square,
            "round" => SwatchStyle::Round,
            "circle" => SwatchStyle::Circle,
            _ => fallback,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SwatchStyle::Square => "square",
            SwatchStyle::Round => "round",
            SwatchStyle::Circle => "circle",
        }
    }
}

/// A fully resolved swatch request.
#[derive(Debug, Clone, PartialEq)]
pub struct SwatchRequest {
    pub color: String,
    pub style: SwatchStyle,
    pub size: f64,
    /// Label text; empty means no label.
    pub text: String,
    pub text_color: String,
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl SwatchRequest {
    /// Resolve every field from raw parameters. Never fails.
    pub fn from_params(params: &QueryParams) -> Self {
        let color = normalize_color(&params.resolve(&["color"], ""));
        let style = SwatchStyle::resolve(
            &params.resolve(&["style"], SwatchStyle::Square.as_str()).to_lowercase(),
            SwatchStyle::Square,
        );
        let size = parse_number(&params.resolve(&["size"], DEFAULT_SIZE));
        let text = params.resolve(&["text"], "");
        let text_color = normalize_color(&params.resolve(&["textColor", "tc"], DEFAULT_TEXT_COLOR));
        let top = params.resolve_number(&["top", "t"], 0.0);
        let bottom = params.resolve_number(&["bottom", "b"], top);
        let left = params.resolve_number(&["left", "l"], 0.0);
        let right = params.resolve_number(&["right", "r"], left);

        Self {
            color,
            style,
            size,
            text,
            text_color,
            top,
            bottom,
            left,
            right,
        }
    }

    pub fn has_text(&self) -> bool {
        !self.text.is_empty()
    }

    /// Label length in UTF-16 code units.
    pub fn text_len(&self) -> usize {
        self.text.encode_utf16().count()
    }

    pub fn width(&self) -> f64 {
        let content = if self.has_text() {
            self.text_len() as f64 * LabelMetrics::CHAR_WIDTH
        } else {
            self.size
        };
        self.left + content + self.right
    }

    pub fn height(&self) -> f64 {
        let content = if self.has_text() { LabelMetrics::LINE_HEIGHT } else { self.size };
        self.top + content + self.bottom
    }

    /// Corner radius for square and round swatches.
    pub fn corner_radius(&self) -> f64 {
        match self.style {
            SwatchStyle::Round => self.size / ROUND_RADIUS_DIVISOR,
            _ => 0.0,
        }
    }
}

impl Default for SwatchRequest {
    fn default() -> Self {
        Self::from_params(&QueryParams::new())
    }
}
