//! Loosely-typed clause input.
//!
//! Every clause parser takes a [`Value`] and matches on its variant. Absent
//! arguments are [`Value::Null`].

mod convert;
mod map;

pub use map::Map;

use std::fmt;

/// A clause input: absent, a scalar, an ordered list, or an ordered mapping.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absent / null
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    /// Ordered list; elements may themselves be lists
    List(Vec<Value>),
    /// Insertion-ordered mapping
    Map(Map),
}

impl Value {
    /// Whether the value counts as "not passed".
    ///
    /// Null, empty text, zero, NaN and `false` are falsy. Lists and maps are
    /// never falsy, even when empty.
    pub fn is_falsy(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Bool(b) => !b,
            Value::Int(n) => *n == 0,
            Value::Float(f) => *f == 0.0 || f.is_nan(),
            Value::Text(s) => s.is_empty(),
            Value::List(_) | Value::Map(_) => false,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Borrow the text of a [`Value::Text`].
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Borrow the text of a non-empty [`Value::Text`].
    pub(crate) fn as_non_empty_str(&self) -> Option<&str> {
        self.as_str().filter(|s| !s.is_empty())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("NULL"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => fmt_float(*x, f),
            Value::Text(s) => f.write_str(s),
            Value::List(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{item}")?;
                }
                Ok(())
            }
            Value::Map(map) => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key} = {value}")?;
                }
                Ok(())
            }
        }
    }
}

// Integral floats print without a fractional part (`24.0` -> `24`).
fn fmt_float(x: f64, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if x.is_finite() && x.fract() == 0.0 && x.abs() < 1e15 {
        write!(f, "{}", x as i64)
    } else {
        write!(f, "{x}")
    }
}

/// Render a value for inclusion in a value list.
///
/// Text gets wrapped in double quotes on whichever end lacks one, so already
/// quoted text is left alone. Text containing a backslash is treated as a raw
/// SQL expression instead: the first backslash is dropped and no quotes are
/// added (`\NOW()` renders as `NOW()`). Other values render unchanged.
pub fn add_quotes(value: &Value) -> String {
    match value {
        Value::Text(text) if text.contains('\\') => text.replacen('\\', "", 1),
        Value::Text(text) => {
            let mut quoted = String::with_capacity(text.len() + 2);
            if !text.starts_with('"') {
                quoted.push('"');
            }
            quoted.push_str(text);
            if !text.ends_with('"') {
                quoted.push('"');
            }
            quoted
        }
        other => other.to_string(),
    }
}
