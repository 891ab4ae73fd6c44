use super::format::StatementKind;
use super::traits::Statement;
use crate::clause::{parse_call, parse_parameters};
use crate::error::ClauseResult;
use crate::value::Value;
use serde::{Deserialize, Serialize};

/// A rendered CALL together with the values to bind to its placeholders.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallStatement {
    /// `CALL routine(?, ...)`
    pub query: String,
    /// One value per placeholder, in order
    pub param: Vec<Value>,
}

/// CALL statement builder.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallQuery {
    target: Value,
    parameters: Value,
}

impl CallQuery {
    /// Create a CALL of the routine named `target`.
    pub fn new(target: impl Into<Value>) -> Self {
        Self {
            target: target.into(),
            parameters: Value::Null,
        }
    }

    /// Set the parameters: a list, a map (values in key order) or
    /// comma-separated text.
    pub fn parameters(&mut self, parameters: impl Into<Value>) -> &mut Self {
        self.parameters = parameters.into();
        self
    }

    /// Build the SQL and collect its parameters.
    pub fn build(&self) -> ClauseResult<CallStatement> {
        Ok(CallStatement {
            query: self.build_sql()?,
            param: parse_parameters(&self.parameters),
        })
    }
}

impl Statement for CallQuery {
    fn kind(&self) -> StatementKind {
        StatementKind::Call
    }

    fn render(&self) -> ClauseResult<String> {
        Ok(format!("CALL {}", parse_call(&self.target, &self.parameters)?))
    }
}

/// `CALL target(?, ...)` plus its parameter values.
pub fn query_call(
    target: impl Into<Value>,
    parameters: impl Into<Value>,
) -> ClauseResult<CallStatement> {
    CallQuery::new(target).parameters(parameters).build()
}
