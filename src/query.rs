//! Query parameter extraction.
//!
//! HTTP query strings may repeat a name, so every value is either a single
//! string or an ordered sequence of strings. Consumers only ever look at the
//! first occurrence, and every optional parameter resolves through an ordered
//! list of names ending in a literal default.

use crate::error::{Result, SwatchError};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufReader, Read};

lazy_static! {
    static ref RE_DECIMAL: Regex =
        Regex::new(r"^[+-]?(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?$").unwrap();
    static ref RE_INFINITY: Regex = Regex::new(r"^([+-]?)Infinity$").unwrap();
}

/// A raw parameter value as it arrives from a query string or JSON object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum QueryValue {
    Single(String),
    Multiple(Vec<String>),
}

impl QueryValue {
    /// The value itself, or the first element when the parameter repeats.
    pub fn first(&self) -> &str {
        match self {
            QueryValue::Single(value) => value,
            QueryValue::Multiple(values) => values.first().map(String::as_str).unwrap_or(""),
        }
    }

    fn push(&mut self, value: String) {
        match self {
            QueryValue::Single(existing) => {
                let existing = std::mem::take(existing);
                *self = QueryValue::Multiple(vec![existing, value]);
            }
            QueryValue::Multiple(values) => values.push(value),
        }
    }
}

/// Named request parameters. Names are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QueryParams {
    values: HashMap<String, QueryValue>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(name, value)` pairs in order of appearance.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut params = Self::new();
        for (name, value) in pairs {
            params.append(name, value);
        }
        params
    }

    /// Add an occurrence of `name`. A second occurrence turns the value into a sequence.
    pub fn append(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        match self.values.entry(name.into()) {
            Entry::Occupied(mut entry) => entry.get_mut().push(value),
            Entry::Vacant(entry) => {
                entry.insert(QueryValue::Single(value));
            }
        }
    }

    /// Append every occurrence from `other` after the ones already present.
    pub fn extend(&mut self, other: QueryParams) {
        for (name, value) in other.values {
            match value {
                QueryValue::Single(value) => self.append(name, value),
                QueryValue::Multiple(values) => {
                    for value in values {
                        self.append(name.clone(), value);
                    }
                }
            }
        }
    }

    /// First value of `name`, if present.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(QueryValue::first)
    }

    /// Resolve the first present name in `names`, falling back to `default`.
    pub fn resolve(&self, names: &[&str], default: &str) -> String {
        names
            .iter()
            .find_map(|name| self.get(name))
            .unwrap_or(default)
            .to_string()
    }

    /// Resolve a numeric parameter; the default is an already-resolved number.
    pub fn resolve_number(&self, names: &[&str], default: f64) -> f64 {
        names
            .iter()
            .find_map(|name| self.get(name))
            .map(parse_number)
            .unwrap_or(default)
    }

    /// Parse an `application/x-www-form-urlencoded` query string, with or without a leading `?`.
    pub fn from_query_str(query: &str) -> Result<Self> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(query).map_err(|e| SwatchError::Query(e.to_string()))?;
        Ok(Self::from_pairs(pairs))
    }

    /// Parse a JSON object whose values are strings or arrays of strings.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Load parameters for a one-shot render: a JSON file (`-` for stdin)
    /// when `json` is given, otherwise the query string.
    pub fn load(query: &str, json: Option<&str>) -> Result<Self> {
        match json {
            Some("-") => Self::from_json_reader(io::stdin().lock()),
            Some(path) => Self::from_json_reader(BufReader::new(File::open(path)?)),
            None => Self::from_query_str(query),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Convert a string to a number the way a browser's `Number(string)` does.
///
/// Surrounding whitespace is ignored and an empty string is `0`. Besides
/// decimal literals this accepts `0x`/`0o`/`0b` integers and `Infinity`.
/// Anything else is `NaN`.
pub fn parse_number(raw: &str) -> f64 {
    let s = raw.trim_matches(is_number_whitespace);
    if s.is_empty() {
        return 0.0;
    }

    if let Some(caps) = RE_INFINITY.captures(s) {
        return if &caps[1] == "-" {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        };
    }

    let radix = match s.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return parse_radix_integer(&s[2..], radix);
    }

    if RE_DECIMAL.is_match(s) {
        s.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

// White space and line terminators as `Number()` trims them. Unlike
// `char::is_whitespace` this excludes U+0085 and includes U+FEFF.
fn is_number_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' ' | '\u{A0}' | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}' | '\u{2029}' | '\u{202F}' | '\u{205F}' | '\u{3000}' | '\u{FEFF}'
    )
}

fn parse_radix_integer(digits: &str, radix: u32) -> f64 {
    if digits.is_empty() {
        return f64::NAN;
    }
    let mut acc = 0.0_f64;
    for c in digits.chars() {
        match c.to_digit(radix) {
            Some(d) => acc = acc * radix as f64 + d as f64,
            None => return f64::NAN,
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_of_repeated_value() {
        let params = QueryParams::from_pairs([("size", "10"), ("size", "30"), ("color", "f00")]);
        assert_eq!(params.get("size"), Some("10"));
        assert_eq!(params.get("color"), Some("f00"));
        assert_eq!(params.get("missing"), None);
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_from_query_str() {
        let params = QueryParams::from_query_str("?color=%23f00&text=Hello+World&size=1&size=2").unwrap();
        assert_eq!(params.get("color"), Some("#f00"));
        assert_eq!(params.get("text"), Some("Hello World"));
        assert_eq!(params.get("size"), Some("1"));
        assert!(QueryParams::from_query_str("").unwrap().is_empty());
    }

    #[test]
    fn test_from_json_reader() {
        let reader = io::Cursor::new(r#"{"style": "circle", "tc": ["0f0", "f00"]}"#);
        let params = QueryParams::from_json_reader(reader).unwrap();
        assert_eq!(params.get("style"), Some("circle"));
        assert_eq!(params.get("tc"), Some("0f0"));
    }

    #[test]
    fn test_from_json_rejects_non_string_values() {
        for json in [r#"{"size": 20}"#, r#"["color", "f00"]"#, "{"] {
            let err = QueryParams::from_json_str(json).unwrap_err();
            assert!(matches!(err, SwatchError::Json(_)), "{:?}", err);
            assert!(err.to_string().starts_with("invalid JSON parameters"));
        }
    }

    #[test]
    fn test_load_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, br#"{"color": "abc", "size": "12"}"#).unwrap();
        let path = file.path().to_str().unwrap();

        let params = QueryParams::load("color=f00", Some(path)).unwrap();
        assert_eq!(params.get("color"), Some("abc"));
        assert_eq!(params.get("size"), Some("12"));
    }

    #[test]
    fn test_load_from_query_string() {
        let params = QueryParams::load("?color=f00&style=round", None).unwrap();
        assert_eq!(params.get("color"), Some("f00"));
        assert_eq!(params.get("style"), Some("round"));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("params.json");
        let err = QueryParams::load("", Some(missing.to_str().unwrap())).unwrap_err();
        assert!(matches!(err, SwatchError::Io(_)), "{:?}", err);
        assert!(err.to_string().starts_with("I/O error"));
    }

    #[test]
    fn test_extend_keeps_existing_first() {
        let mut params = QueryParams::from_pairs([("color", "f00")]);
        params.extend(QueryParams::from_pairs([("color", "0f0"), ("size", "5")]));
        assert_eq!(params.get("color"), Some("f00"));
        assert_eq!(params.get("size"), Some("5"));
    }

    #[test]
    fn test_empty_sequence_is_empty_string() {
        assert_eq!(QueryValue::Multiple(vec![]).first(), "");
    }

    #[test]
    fn test_resolve_walks_names_in_order() {
        let params = QueryParams::from_pairs([("tc", "0f0")]);
        assert_eq!(params.resolve(&["textColor", "tc"], "#FFF"), "0f0");

        let params = QueryParams::from_pairs([("tc", "0f0"), ("textColor", "00f")]);
        assert_eq!(params.resolve(&["textColor", "tc"], "#FFF"), "00f");

        assert_eq!(QueryParams::new().resolve(&["textColor", "tc"], "#FFF"), "#FFF");
    }

    #[test]
    fn test_resolve_number_default() {
        let params = QueryParams::from_pairs([("t", "7")]);
        assert_eq!(params.resolve_number(&["top", "t"], 0.0), 7.0);
        assert_eq!(params.resolve_number(&["bottom", "b"], 7.0), 7.0);
    }

    #[test]
    fn test_json_shapes() {
        let params: QueryParams =
            serde_json::from_str(r##"{"color": "#abc", "size": ["12", "40"]}"##).unwrap();
        assert_eq!(params.get("color"), Some("#abc"));
        assert_eq!(params.get("size"), Some("12"));
    }

    #[test]
    fn test_parse_number_decimal() {
        assert_eq!(parse_number("20"), 20.0);
        assert_eq!(parse_number(" 2.5 "), 2.5);
        assert_eq!(parse_number("-3"), -3.0);
        assert_eq!(parse_number("+4"), 4.0);
        assert_eq!(parse_number(".5"), 0.5);
        assert_eq!(parse_number("5."), 5.0);
        assert_eq!(parse_number("1e3"), 1000.0);
        assert_eq!(parse_number(""), 0.0);
        assert_eq!(parse_number("   "), 0.0);
    }

    #[test]
    fn test_parse_number_prefixed_and_infinity() {
        assert_eq!(parse_number("0x1F"), 31.0);
        assert_eq!(parse_number("0o17"), 15.0);
        assert_eq!(parse_number("0b101"), 5.0);
        assert_eq!(parse_number("Infinity"), f64::INFINITY);
        assert_eq!(parse_number("-Infinity"), f64::NEG_INFINITY);
    }

    #[test]
    fn test_parse_number_whitespace() {
        assert_eq!(parse_number("\t5\n"), 5.0);
        assert_eq!(parse_number("\u{A0}5\u{3000}"), 5.0);
        assert_eq!(parse_number("\u{FEFF}5\u{2028}"), 5.0);
        assert_eq!(parse_number("\u{2009}"), 0.0);
        assert!(parse_number("\u{85}5").is_nan());
        assert!(parse_number("5\u{85}").is_nan());
        assert!(parse_number("\u{200B}5").is_nan());
    }

    #[test]
    fn test_parse_number_rejects_garbage() {
        for input in ["abc", "12px", "inf", "nan", "NaN", "0x", "-0x10", "1e", "1,5"] {
            assert!(parse_number(input).is_nan(), "{:?} should be NaN", input);
        }
    }
}
