use super::format::StatementKind;
use super::traits::Statement;
use crate::clause::where_clause::has_predicate;
use crate::clause::{parse_update_values, parse_where, reject};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// UPDATE statement builder.
///
/// An UPDATE always needs a condition: building fails with
/// [`ClauseError::UpdateConditionMissing`] when the condition has no
/// non-blank predicate (absent, whitespace-only text, `[""]`, only `OR`
/// markers). The condition is checked before the values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuery {
    table: Value,
    values: Value,
    condition: Value,
}

impl UpdateQuery {
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set the assignments. See [`parse_update_values`] for the accepted
    /// shapes.
    pub fn set(&mut self, values: impl Into<Value>) -> &mut Self {
        self.values = values.into();
        self
    }

    pub fn filter(&mut self, condition: impl Into<Value>) -> &mut Self {
        self.condition = condition.into();
        self
    }
}

impl Statement for UpdateQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Update
    }

    fn render(&self) -> ClauseResult<String> {
        let Some(table) = self.table.as_non_empty_str() else {
            return reject(ClauseError::StatementTableMissing("query_update"));
        };
        if !has_predicate(&self.condition) {
            return reject(ClauseError::UpdateConditionMissing);
        }
        let condition = parse_where(&self.condition);
        let values = parse_update_values(&self.values)?;
        Ok(format!("UPDATE {table}{values}{condition}"))
    }
}

/// `UPDATE table SET ... WHERE ...`
pub fn query_update(
    table: impl Into<Value>,
    values: impl Into<Value>,
    condition: impl Into<Value>,
) -> ClauseResult<String> {
    UpdateQuery::new(table).set(values).filter(condition).build_sql()
}
