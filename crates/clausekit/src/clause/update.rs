use super::{pairs, reject};
use crate::error::{ClauseError, ClauseResult};
use crate::value::{Map, Value, add_quotes};
use std::borrow::Cow;

/// Render the `SET` part of an `UPDATE`.
///
/// Accepts a map of columns to values, a list of `key = value` strings, or
/// comma-separated `key = value` text. Entries without `=` are dropped; if
/// nothing is left the input is malformed.
pub fn parse_update_values(values: &Value) -> ClauseResult<String> {
    match normalize(values) {
        Ok(map) => Ok(render(&map)),
        Err(err) => reject(err),
    }
}

fn normalize(values: &Value) -> ClauseResult<Cow<'_, Map>> {
    if values.is_falsy() {
        return Err(ClauseError::UpdateValuesMissing);
    }

    let map: Map = match values {
        Value::Map(map) if !map.is_empty() => return Ok(Cow::Borrowed(map)),
        Value::List(items) => items
            .iter()
            .filter_map(|item| pairs::parse_pair(&item.to_string()))
            .collect(),
        Value::Text(text) => pairs::parse_pairs(text),
        _ => return Err(ClauseError::UpdateValuesMalformed),
    };

    if map.is_empty() {
        Err(ClauseError::UpdateValuesMalformed)
    } else {
        Ok(Cow::Owned(map))
    }
}

fn render(map: &Map) -> String {
    let assignments = map
        .iter()
        .map(|(column, value)| format!("{column} = {}", add_quotes(value)))
        .collect::<Vec<_>>()
        .join(", ");
    format!(" SET {assignments}")
}
