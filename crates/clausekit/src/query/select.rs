use super::format::StatementKind;
use super::traits::Statement;
use crate::clause::{
    parse_columns, parse_group, parse_join, parse_limit, parse_order, parse_table, parse_where,
};
use crate::error::ClauseResult;
use crate::value::Value;

/// SELECT statement builder.
///
/// Clauses render in a fixed order: columns, table, join, where, group/having,
/// order, limit. Unset clauses are left out.
///
/// ```
/// use clausekit::{SelectQuery, Statement, Value};
///
/// let sql = SelectQuery::new("member")
///     .columns(["name", "age"])
///     .filter(Value::from(["age >= 20", "OR", "vip = 1"]))
///     .order_by("age DESC")
///     .limit(10)
///     .build_sql()
///     .unwrap();
/// assert_eq!(
///     sql,
///     "SELECT name, age FROM member WHERE (age >= 20) OR (vip = 1) ORDER BY age DESC LIMIT 10"
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    table: Value,
    columns: Value,
    join_type: Value,
    join: Value,
    on: Value,
    condition: Value,
    group: Value,
    having: Value,
    order: Value,
    limit: Value,
}

impl SelectQuery {
    /// Create a new SELECT over `table` (text, list of names, or map keys).
    pub fn new(table: impl Into<Value>) -> Self {
        Self {
            table: table.into(),
            ..Self::default()
        }
    }

    /// Set the selected columns. Unset selects `*`.
    pub fn columns(&mut self, columns: impl Into<Value>) -> &mut Self {
        self.columns = columns.into();
        self
    }

    /// Join another table. An empty `join_type` is a plain `JOIN`.
    pub fn join(
        &mut self,
        join_type: impl Into<Value>,
        table: impl Into<Value>,
        on: impl Into<Value>,
    ) -> &mut Self {
        self.join_type = join_type.into();
        self.join = table.into();
        self.on = on.into();
        self
    }

    /// Set the WHERE condition.
    pub fn filter(&mut self, condition: impl Into<Value>) -> &mut Self {
        self.condition = condition.into();
        self
    }

    /// Set GROUP BY and an optional HAVING.
    pub fn group_by(&mut self, group: impl Into<Value>, having: impl Into<Value>) -> &mut Self {
        self.group = group.into();
        self.having = having.into();
        self
    }

    pub fn order_by(&mut self, order: impl Into<Value>) -> &mut Self {
        self.order = order.into();
        self
    }

    pub fn limit(&mut self, limit: impl Into<Value>) -> &mut Self {
        self.limit = limit.into();
        self
    }
}

impl Statement for SelectQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Select
    }

    fn render(&self) -> ClauseResult<String> {
        let table = parse_table(&self.table)?;
        Ok(format!(
            "SELECT{}{}{}{}{}{}{}",
            parse_columns(&self.columns),
            table,
            parse_join(&self.join_type, &self.join, &self.on),
            parse_where(&self.condition),
            parse_group(&self.group, &self.having),
            parse_order(&self.order),
            parse_limit(&self.limit),
        ))
    }
}

/// `SELECT columns FROM table [WHERE] [ORDER BY] [LIMIT]`
pub fn query_select(
    table: impl Into<Value>,
    columns: impl Into<Value>,
    condition: impl Into<Value>,
    order: impl Into<Value>,
    limit: impl Into<Value>,
) -> ClauseResult<String> {
    SelectQuery::new(table)
        .columns(columns)
        .filter(condition)
        .order_by(order)
        .limit(limit)
        .build_sql()
}

/// [`query_select`] with GROUP BY / HAVING.
#[allow(clippy::too_many_arguments)]
pub fn query_select_group(
    table: impl Into<Value>,
    columns: impl Into<Value>,
    condition: impl Into<Value>,
    group: impl Into<Value>,
    having: impl Into<Value>,
    order: impl Into<Value>,
    limit: impl Into<Value>,
) -> ClauseResult<String> {
    SelectQuery::new(table)
        .columns(columns)
        .filter(condition)
        .group_by(group, having)
        .order_by(order)
        .limit(limit)
        .build_sql()
}

/// [`query_select`] with a JOIN.
#[allow(clippy::too_many_arguments)]
pub fn query_select_join(
    table: impl Into<Value>,
    join_type: impl Into<Value>,
    join: impl Into<Value>,
    on: impl Into<Value>,
    columns: impl Into<Value>,
    condition: impl Into<Value>,
    order: impl Into<Value>,
    limit: impl Into<Value>,
) -> ClauseResult<String> {
    SelectQuery::new(table)
        .join(join_type, join, on)
        .columns(columns)
        .filter(condition)
        .order_by(order)
        .limit(limit)
        .build_sql()
}

/// [`query_select`] with a JOIN and GROUP BY / HAVING.
#[allow(clippy::too_many_arguments)]
pub fn query_select_join_group(
    table: impl Into<Value>,
    join_type: impl Into<Value>,
    join: impl Into<Value>,
    on: impl Into<Value>,
    columns: impl Into<Value>,
    condition: impl Into<Value>,
    group: impl Into<Value>,
    having: impl Into<Value>,
    order: impl Into<Value>,
    limit: impl Into<Value>,
) -> ClauseResult<String> {
    SelectQuery::new(table)
        .join(join_type, join, on)
        .columns(columns)
        .filter(condition)
        .group_by(group, having)
        .order_by(order)
        .limit(limit)
        .build_sql()
}
