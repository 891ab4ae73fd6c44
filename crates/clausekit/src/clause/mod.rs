//! Clause parsers.
//!
//! Each parser turns one [`Value`] argument into a clause fragment. A fragment
//! is either empty (clause omitted) or starts with a single space followed by
//! its keyword, so fragments can be concatenated directly.

pub mod call;
pub mod columns;
pub mod group;
pub mod insert;
pub mod join;
pub mod limit;
pub mod order;
pub(crate) mod pairs;
pub mod table;
pub mod update;
pub mod where_clause;

pub use call::{parse_call, parse_parameters};
pub use columns::parse_columns;
pub use group::parse_group;
pub use insert::parse_insert_values;
pub use join::parse_join;
pub use limit::parse_limit;
pub use order::parse_order;
pub use table::parse_table;
pub use update::parse_update_values;
pub use where_clause::parse_where;

use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// Comma-joined names from non-empty text, a non-empty list, or the keys of
/// a non-empty map. Map values are labels and are ignored.
pub(crate) fn name_list(value: &Value) -> Option<String> {
    match value {
        Value::Text(text) if !text.is_empty() => Some(text.clone()),
        Value::List(items) if !items.is_empty() => Some(join_display(items)),
        Value::Map(map) if !map.is_empty() => Some(map.keys().collect::<Vec<_>>().join(", ")),
        _ => None,
    }
}

pub(crate) fn join_display(items: &[Value]) -> String {
    items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Case-insensitive ASCII prefix test.
pub(crate) fn starts_with_keyword(s: &str, keyword: &str) -> bool {
    match s.get(0..keyword.len()) {
        Some(prefix) => prefix.eq_ignore_ascii_case(keyword),
        None => false,
    }
}

pub(crate) fn reject<T>(err: ClauseError) -> ClauseResult<T> {
    #[cfg(feature = "tracing")]
    tracing::trace!(
        target: "clausekit.sql",
        origin = err.origin(),
        kind = ?err.kind(),
        "clause rejected: {err}"
    );
    Err(err)
}
