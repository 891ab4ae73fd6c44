use super::{name_list, reject};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// Render the `FROM` clause.
///
/// Fails with [`ClauseError::MissingTableTarget`] when nothing was passed, and
/// with [`ClauseError::TableNotSpecified`] when the input resolves to no
/// table names (empty list or map, or a non-text scalar).
pub fn parse_table(table: &Value) -> ClauseResult<String> {
    if table.is_falsy() {
        return reject(ClauseError::MissingTableTarget);
    }

    match name_list(table) {
        Some(names) => Ok(format!(" FROM {names}")),
        None => reject(ClauseError::TableNotSpecified),
    }
}
