use super::format::{StatementKind, format_statement};
use crate::error::ClauseResult;

/// A buildable SQL statement.
pub trait Statement {
    /// Which statement this builder produces.
    fn kind(&self) -> StatementKind;

    /// Concatenate the clause fragments without normalising whitespace.
    fn render(&self) -> ClauseResult<String>;

    /// Build the final SQL string.
    fn build_sql(&self) -> ClauseResult<String> {
        let raw = self.render()?;
        Ok(format_statement(self.kind(), &raw))
    }

    /// Debug helper.
    fn to_sql(&self) -> ClauseResult<String> {
        self.build_sql()
    }
}
