use super::name_list;
use crate::value::Value;

/// Render `ORDER BY`.
///
/// Text and lists are used as sort items directly. A map pairs each column
/// with its direction (`{age: "DESC"}` renders `age DESC`).
pub fn parse_order(order: &Value) -> String {
    let items = match order {
        Value::Map(map) if !map.is_empty() => map
            .iter()
            .map(|(column, direction)| match direction {
                Value::Null => column.to_string(),
                Value::Text(d) if d.trim().is_empty() => column.to_string(),
                direction => format!("{column} {direction}"),
            })
            .collect::<Vec<_>>()
            .join(", "),
        other => match name_list(other) {
            Some(items) => items,
            None => return String::new(),
        },
    };

    format!(" ORDER BY {items}")
}
