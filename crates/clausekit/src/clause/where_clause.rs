//! `WHERE` clause rendering.
//!
//! Text is used verbatim. Lists and maps become parenthesised predicates
//! joined by `AND`, where an `OR` marker switches the joiner in front of the
//! next predicate:
//!
//! ```
//! use clausekit::{Map, Value, parse_where};
//!
//! let list = Value::from(["a=1", "b=2", "OR", "c=3"]);
//! assert_eq!(parse_where(&list), " WHERE (a=1) AND (b=2) OR (c=3)");
//!
//! let map: Map = [
//!     ("age", Value::Int(24)),
//!     ("memo", "AGAINST(\"Important\")".into()),
//! ]
//! .into_iter()
//! .collect();
//! assert_eq!(
//!     parse_where(&Value::Map(map)),
//!     " WHERE (age = 24) AND (MATCH(memo) AGAINST(\"Important\"))"
//! );
//! ```

use super::starts_with_keyword;
use crate::value::{Map, Value};

/// Render a `WHERE` clause, or an empty string when there is no predicate.
///
/// Map keys select how each entry renders:
/// - keys whose uppercase form starts with `OR` are joiner markers (their
///   values are ignored);
/// - keys starting with `_` emit their value verbatim in parentheses;
/// - every other key is a column, rendered by the shape of its condition
///   (operator, `AGAINST`, `BETWEEN`, `IN`, `LIKE`, `MATCH`, else `=`).
pub fn parse_where(condition: &Value) -> String {
    match condition {
        Value::Text(text) if !text.is_empty() => format!(" WHERE {text}"),
        Value::List(items) => from_list(items),
        Value::Map(map) => from_map(map),
        _ => String::new(),
    }
}

fn from_list(items: &[Value]) -> String {
    let mut predicates = Predicates::default();
    for item in items {
        let item = item.to_string();
        if item.eq_ignore_ascii_case("OR") {
            predicates.or_marker();
        } else {
            predicates.push(&item);
        }
    }
    predicates.finish()
}

fn from_map(map: &Map) -> String {
    let mut predicates = Predicates::default();
    for (column, condition) in map.iter() {
        if starts_with_keyword(column, "OR") {
            predicates.or_marker();
        } else if column.starts_with('_') {
            predicates.push(&condition.to_string());
        } else {
            predicates.push(&render_condition(column, &condition.to_string()));
        }
    }
    predicates.finish()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Joiner {
    And,
    Or,
}

impl Joiner {
    fn keyword(self) -> &'static str {
        match self {
            Joiner::And => " AND",
            Joiner::Or => " OR",
        }
    }
}

/// Accumulates predicates. `pending` is the joiner that goes in front of the
/// next predicate; it is `None` until the first predicate is pushed, so a
/// leading `OR` marker is a no-op and a trailing one is never written.
#[derive(Debug, Default)]
struct Predicates {
    clause: String,
    pending: Option<Joiner>,
}

impl Predicates {
    fn or_marker(&mut self) {
        if self.pending.is_some() {
            self.pending = Some(Joiner::Or);
        }
    }

    fn push(&mut self, predicate: &str) {
        if let Some(joiner) = self.pending {
            self.clause.push_str(joiner.keyword());
        }
        self.clause.push_str(" (");
        self.clause.push_str(predicate);
        self.clause.push(')');
        self.pending = Some(Joiner::And);
    }

    fn finish(self) -> String {
        if self.clause.is_empty() {
            String::new()
        } else {
            format!(" WHERE{}", self.clause)
        }
    }
}

/// How a `column -> condition` entry renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Template {
    /// Condition carries its own operator: `column condition`
    Operator,
    /// `AGAINST(...)`: `MATCH(column) condition`
    FullText,
    /// `BETWEEN` / `NOT BETWEEN`
    Range,
    /// `IN` / `NOT IN`
    Membership,
    /// `LIKE` / `NOT LIKE`
    Pattern,
    /// `MATCH ...`: `MATCH(column) rest`
    Match,
    /// `column = condition`
    Equality,
}

const OPERATORS: &[&str] = &["!=", "<>", "<=", ">=", "<", ">", "IS"];

impl Template {
    /// Classify a condition. Checks run in priority order and ignore case.
    pub(crate) fn classify(condition: &str) -> Self {
        let upper = condition.to_ascii_uppercase();

        if OPERATORS.iter().any(|op| upper.contains(op)) {
            Template::Operator
        } else if upper.starts_with("AGAINST") {
            Template::FullText
        } else if starts_with_any(&upper, &["BETWEEN", "NOT BETWEEN"]) {
            Template::Range
        } else if starts_with_any(&upper, &["IN", "NOT IN"]) {
            Template::Membership
        } else if starts_with_any(&upper, &["LIKE", "NOT LIKE"]) {
            Template::Pattern
        } else if upper.starts_with("MATCH") {
            Template::Match
        } else {
            Template::Equality
        }
    }
}

fn starts_with_any(s: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|k| s.starts_with(k))
}

fn render_condition(column: &str, condition: &str) -> String {
    match Template::classify(condition) {
        Template::Operator | Template::Range | Template::Membership | Template::Pattern => {
            format!("{column} {condition}")
        }
        Template::FullText => format!("MATCH({column}) {condition}"),
        // "MATCH" is ASCII, so byte 5 is a char boundary.
        Template::Match => format!("MATCH({column}) {}", condition[5..].trim_start()),
        Template::Equality => format!("{column} = {condition}"),
    }
}

/// Whether `condition` has at least one predicate that is not blank.
///
/// `parse_where` renders blank predicates as-is (`WHERE ()`); callers that
/// need a real condition check this first.
pub(crate) fn has_predicate(condition: &Value) -> bool {
    match condition {
        Value::Text(text) => !text.trim().is_empty(),
        Value::List(items) => items.iter().any(|item| {
            let item = item.to_string();
            !item.eq_ignore_ascii_case("OR") && !item.trim().is_empty()
        }),
        Value::Map(map) => map.iter().any(|(column, condition)| {
            !starts_with_keyword(column, "OR") && !condition.to_string().trim().is_empty()
        }),
        _ => false,
    }
}
