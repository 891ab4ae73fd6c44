use super::format::StatementKind;
use super::traits::Statement;
use crate::clause::{parse_insert_values, reject};
use crate::error::{ClauseError, ClauseResult};
use crate::value::Value;

/// INSERT statement builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertQuery {
    table: Value,
    values: Value,
}

impl InsertQuery {
    /// Create a new INSERT into `table`, which must be a plain table name.
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            values: Value::Null,
        }
    }

    /// Set the row(s) to insert. See [`parse_insert_values`] for the
    /// accepted shapes.
    pub fn values(&mut self, values: impl Into<Value>) -> &mut Self {
        self.values = values.into();
        self
    }
}

impl Statement for InsertQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Insert
    }

    fn render(&self) -> ClauseResult<String> {
        let Some(table) = self.table.as_non_empty_str() else {
            return reject(ClauseError::StatementTableMissing("query_insert"));
        };
        let values = parse_insert_values(&self.values)?;
        Ok(format!("INSERT INTO {table}{values}"))
    }
}

/// `INSERT INTO table ...`
pub fn query_insert(table: impl Into<Value>, values: impl Into<Value>) -> ClauseResult<String> {
    InsertQuery::new(table).values(values).build_sql()
}
