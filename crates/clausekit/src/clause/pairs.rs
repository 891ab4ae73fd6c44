//! `key = value` normalisation shared by the INSERT and UPDATE parsers.

use crate::value::{Map, Value};

/// Split a segment at its first `=`.
///
/// Returns `None` when there is no `=` or the key is blank; such segments
/// are dropped by callers.
pub(crate) fn parse_pair(segment: &str) -> Option<(String, Value)> {
    let (key, value) = segment.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key.to_string(), coerce(value.trim())))
}

/// Parse comma-separated `key = value` segments into a canonical map.
pub(crate) fn parse_pairs(text: &str) -> Map {
    text.split(',').filter_map(parse_pair).collect()
}

/// Numeric text becomes a number; everything else stays text.
pub(crate) fn coerce(raw: &str) -> Value {
    if let Ok(n) = raw.parse::<i64>() {
        return Value::Int(n);
    }
    match raw.parse::<f64>() {
        Ok(x) if x.is_finite() => Value::Float(x),
        _ => Value::Text(raw.to_string()),
    }
}
