use super::name_list;
use crate::value::Value;

/// Render the column list of a `SELECT`.
///
/// Text is used verbatim, lists are comma-joined, and maps contribute their
/// keys. Anything absent or empty selects `*`.
pub fn parse_columns(columns: &Value) -> String {
    match name_list(columns) {
        Some(names) => format!(" {names}"),
        None => " *".to_string(),
    }
}
