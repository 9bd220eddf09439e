//! Color normalization.
//!
//! Accepts `oklch(L,C,H,A)` and 3/6 digit hex colors (with or without `#`).
//! Anything else degrades to black, so the output is always a usable fill.

use lazy_static::lazy_static;
use regex::Regex;

/// Fill used for any color string that is not recognized.
pub const FALLBACK_COLOR: &str = "#000000";

lazy_static! {
    static ref RE_OKLCH: Regex = Regex::new(
        r"^oklch\(([0-9]+\.?[0-9]*),([0-9]+\.?[0-9]*),([0-9]+\.?[0-9]*),([0-9]+\.?[0-9]*)\)"
    )
    .unwrap();
    static ref RE_HEX: Regex = Regex::new(r"(?i)^#?(?:[0-9a-f]{6}|[0-9a-f]{3})$").unwrap();
}

/// Normalize a raw color string into a hex (`#RRGGBB`) or `oklch(L C H / A)` token.
pub fn normalize_color(raw: &str) -> String {
    if raw.starts_with("oklch") {
        return normalize_oklch(raw);
    }
    if RE_HEX.is_match(raw) {
        return normalize_hex(raw);
    }
    FALLBACK_COLOR.to_string()
}

fn normalize_oklch(raw: &str) -> String {
    let (light, chroma, hue, alpha) = match RE_OKLCH.captures(raw) {
        Some(caps) => (
            caps.get(1).map_or("0", |m| m.as_str()),
            caps.get(2).map_or("0", |m| m.as_str()),
            caps.get(3).map_or("0", |m| m.as_str()),
            caps.get(4).map_or("1", |m| m.as_str()),
        ),
        None => ("0", "0", "0", "1"),
    };
    format!("oklch({} {} {} / {})", light, chroma, hue, alpha)
}

fn normalize_hex(raw: &str) -> String {
    let digits = raw.strip_prefix('#').unwrap_or(raw).to_uppercase();
    if digits.len() == 3 {
        let expanded: String = digits.chars().flat_map(|c| [c, c]).collect();
        format!("#{}", expanded)
    } else {
        format!("#{}", digits)
    }
}
