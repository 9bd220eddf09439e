//! SVG renderer - converts swatch requests into SVG strings.
//!
//! Pure string building, no DOM manipulation.

mod renderer;
mod styles;

pub use renderer::{escape_xml, fmt_num, render_swatch_svg};
pub use styles::*;
