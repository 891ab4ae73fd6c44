use std::fmt;

/// Maximum number of SQL bytes attached to a log event.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) const MAX_LOGGED_SQL: usize = 200;

/// The kind of statement a builder renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatementKind {
    /// SELECT query
    Select,
    /// INSERT statement
    Insert,
    /// UPDATE statement
    Update,
    /// CALL of a stored routine
    Call,
}

impl StatementKind {
    /// Leading SQL keyword.
    pub fn keyword(self) -> &'static str {
        match self {
            StatementKind::Select => "SELECT",
            StatementKind::Insert => "INSERT",
            StatementKind::Update => "UPDATE",
            StatementKind::Call => "CALL",
        }
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Collapse every whitespace run to a single space and trim both ends.
///
/// Runs once per statement, after the clauses are concatenated.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn format_statement(kind: StatementKind, raw: &str) -> String {
    let sql = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    #[cfg(feature = "tracing")]
    tracing::debug!(
        target: "clausekit.sql",
        kind = %kind,
        sql = truncate_sql_bytes(&sql, MAX_LOGGED_SQL),
        "statement rendered"
    );

    sql
}

/// Truncate to at most `max_bytes`, backing off to a char boundary.
#[cfg_attr(not(feature = "tracing"), allow(dead_code))]
pub(crate) fn truncate_sql_bytes(sql: &str, max_bytes: usize) -> &str {
    if sql.len() <= max_bytes {
        return sql;
    }
    let mut end = max_bytes;
    while end > 0 && !sql.is_char_boundary(end) {
        end -= 1;
    }
    &sql[..end]
}
