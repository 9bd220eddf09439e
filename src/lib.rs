//! swatch-svg - Render color swatches as inline SVG
//!
//! This library turns a set of query parameters (color, style, size, padding,
//! optional label) into a small SVG image. Rendering never fails: unknown
//! colors become black, unknown styles become `square` and non-numeric sizes
//! propagate as `NaN`.
//!
//! # Example
//!
//! ```rust
//! use swatch_svg::{render, QueryParams};
//!
//! let params = QueryParams::from_pairs([("color", "f00"), ("style", "round")]);
//! let svg = render(&params);
//! assert!(svg.contains("fill='#FF0000'"));
//! ```
//!
//! # Parameters
//!
//! - `color`: hex (`f00`, `#a1b2c3`) or `oklch(L,C,H,A)`
//! - `style`: `square` (default), `round` or `circle`
//! - `size`: edge length or diameter, default `20`
//! - `text`, `textColor`/`tc`: optional label and its color (default `#FFF`)
//! - `top`/`t`, `bottom`/`b`, `left`/`l`, `right`/`r`: padding

pub mod color;
pub mod error;
pub mod query;
pub mod server;
pub mod svg;
pub mod types;

pub use color::normalize_color;
pub use error::{Result, SwatchError};
pub use query::{parse_number, QueryParams, QueryValue};
pub use svg::render_swatch_svg;
pub use types::*;

/// Render the swatch described by raw request parameters.
///
/// # Example
/// ```rust
/// let params = swatch_svg::QueryParams::from_pairs([("color", "00f"), ("style", "circle")]);
/// let svg = swatch_svg::render(&params);
/// assert!(svg.contains("<circle"));
/// ```
pub fn render(params: &QueryParams) -> String {
    render_swatch_svg(&SwatchRequest::from_params(params))
}
