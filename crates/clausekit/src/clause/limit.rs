use crate::value::Value;

/// Render `LIMIT`.
///
/// Accepts numbers and numeric text; only values strictly greater than zero
/// produce a clause.
pub fn parse_limit(limit: &Value) -> String {
    let n = match limit {
        Value::Int(n) if *n > 0 => return format!(" LIMIT {n}"),
        Value::Float(x) => *x,
        Value::Text(s) => match s.trim().parse::<f64>() {
            Ok(x) => x,
            Err(_) => return String::new(),
        },
        _ => return String::new(),
    };

    if n.is_finite() && n > 0.0 {
        format!(" LIMIT {}", Value::Float(n))
    } else {
        String::new()
    }
}
