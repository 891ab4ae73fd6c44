use super::{pairs, reject};
use crate::error::{ClauseError, ClauseResult};
use crate::value::{Map, Value, add_quotes};
use std::borrow::Cow;

/// Canonical form of INSERT values.
#[derive(Debug, PartialEq)]
enum InsertRows<'a> {
    /// `(c1, c2) VALUES (v1, v2)`
    Columns(Cow<'a, Map>),
    /// `VALUES (v1, v2)`
    Row(&'a [Value]),
    /// `VALUES (r1), (r2)`
    Rows(Vec<&'a [Value]>),
    /// Caller-written value list, used verbatim
    Raw(&'a str),
}

/// Render the column/value part of an `INSERT`.
///
/// Accepts a map of columns to values, a list of values, a list of rows,
/// `key = value` text (converted to the map form), or raw value-list text.
/// Values are quoted with [`add_quotes`]; raw text is not.
///
/// ```
/// use clausekit::{Value, parse_insert_values};
///
/// let values = Value::from(r"age = 24, dateReg = \NOW()");
/// assert_eq!(
///     parse_insert_values(&values).unwrap(),
///     " (age, dateReg) VALUES (24, NOW())"
/// );
/// ```
pub fn parse_insert_values(values: &Value) -> ClauseResult<String> {
    match normalize(values) {
        Ok(rows) => Ok(render(&rows)),
        Err(err) => reject(err),
    }
}

fn normalize(values: &Value) -> ClauseResult<InsertRows<'_>> {
    if values.is_falsy() {
        return Err(ClauseError::InsertValuesMissing);
    }

    match values {
        Value::Map(map) if !map.is_empty() => Ok(InsertRows::Columns(Cow::Borrowed(map))),
        Value::List(items) if !items.is_empty() => normalize_list(items),
        Value::Text(text) if text.contains('=') => {
            let map = pairs::parse_pairs(text);
            if map.is_empty() {
                Err(ClauseError::InsertValuesMalformed)
            } else {
                Ok(InsertRows::Columns(Cow::Owned(map)))
            }
        }
        Value::Text(text) => Ok(InsertRows::Raw(text)),
        _ => Err(ClauseError::InsertValuesMalformed),
    }
}

// Either every element is a non-empty row, or none is a row at all.
fn normalize_list(items: &[Value]) -> ClauseResult<InsertRows<'_>> {
    if !items.iter().any(|item| matches!(item, Value::List(_))) {
        return Ok(InsertRows::Row(items));
    }

    items
        .iter()
        .map(|item| match item {
            Value::List(row) if !row.is_empty() => Ok(row.as_slice()),
            _ => Err(ClauseError::InsertValuesMalformed),
        })
        .collect::<ClauseResult<Vec<_>>>()
        .map(InsertRows::Rows)
}

fn render(rows: &InsertRows<'_>) -> String {
    match rows {
        InsertRows::Columns(map) => {
            let columns = map.keys().collect::<Vec<_>>().join(", ");
            let values = map.values().map(add_quotes).collect::<Vec<_>>().join(", ");
            format!(" ({columns}) VALUES ({values})")
        }
        InsertRows::Row(row) => format!(" VALUES ({})", quote_row(row)),
        InsertRows::Rows(rows) => {
            let rows = rows
                .iter()
                .map(|row| format!("({})", quote_row(row)))
                .collect::<Vec<_>>()
                .join(", ");
            format!(" VALUES {rows}")
        }
        InsertRows::Raw(text) => format!(" VALUES ({text})"),
    }
}

fn quote_row(row: &[Value]) -> String {
    row.iter().map(add_quotes).collect::<Vec<_>>().join(", ")
}
