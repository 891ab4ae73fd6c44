use super::name_list;
use crate::value::Value;

/// Render `GROUP BY` with an optional `HAVING`.
///
/// `having` is dropped when there is nothing to group by.
pub fn parse_group(group: &Value, having: &Value) -> String {
    let Some(names) = name_list(group) else {
        return String::new();
    };

    match having {
        Value::Text(having) if !having.is_empty() => {
            format!(" GROUP BY {names} HAVING {having}")
        }
        _ => format!(" GROUP BY {names}"),
    }
}
