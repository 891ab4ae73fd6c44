use super::reject;
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// Render `target(?, ?, ...)` with one placeholder per parameter.
///
/// Parameters may be absent, a list, a map (one placeholder per key) or
/// comma-separated text (one per segment).
pub fn parse_call(target: &Value, parameters: &Value) -> ClauseResult<String> {
    if target.is_falsy() {
        return reject(ClauseError::CallTargetMissing);
    }
    let Value::Text(target) = target else {
        return reject(ClauseError::CallTargetInvalid);
    };

    let count = match placeholder_count(parameters) {
        Some(count) => count,
        None => return reject(ClauseError::CallParametersInvalid),
    };

    Ok(format!("{target}({})", vec!["?"; count].join(", ")))
}

fn placeholder_count(parameters: &Value) -> Option<usize> {
    match parameters {
        Value::Null => Some(0),
        Value::List(items) => Some(items.len()),
        Value::Map(map) => Some(map.len()),
        Value::Text(text) if text.is_empty() => Some(0),
        Value::Text(text) => Some(text.split(',').count()),
        _ => None,
    }
}

/// Values to bind to the placeholders produced by [`parse_call`], in order.
///
/// Lists yield their elements, maps their values in key order, and text its
/// trimmed comma-separated segments. Any other input yields nothing.
pub fn parse_parameters(parameters: &Value) -> Vec<Value> {
    match parameters {
        Value::List(items) => items.clone(),
        Value::Map(map) => map.values().cloned().collect(),
        Value::Text(text) if text.is_empty() => Vec::new(),
        Value::Text(text) => text
            .split(',')
            .map(|segment| Value::Text(segment.trim().to_string()))
            .collect(),
        _ => Vec::new(),
    }
}
