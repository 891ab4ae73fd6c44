use super::join_display;
use crate::value::Value;

/// Render a `JOIN` clause.
///
/// `join_type` is the join keyword (`INNER`, `LEFT`, `CROSS`, ...); absent or
/// empty means a plain `JOIN`, and a non-text type yields no clause. The
/// target must be non-empty text or a non-empty list. `ON` is only appended
/// for non-cross joins.
pub fn parse_join(join_type: &Value, table: &Value, on: &Value) -> String {
    let join_type = match join_type {
        Value::Null => "",
        Value::Text(t) => t.as_str(),
        _ => return String::new(),
    };

    let target = match table {
        Value::Text(t) if !t.is_empty() => t.clone(),
        Value::List(items) if !items.is_empty() => join_display(items),
        _ => return String::new(),
    };

    let mut clause = if join_type.is_empty() {
        format!(" JOIN {target}")
    } else {
        format!(" {join_type} JOIN {target}")
    };

    if let Value::Text(on) = on {
        if !on.is_empty() && !join_type.eq_ignore_ascii_case("CROSS") {
            clause.push_str(" ON ");
            clause.push_str(on);
        }
    }

    clause
}
