//! Error types for clausekit

use thiserror::Error;

/// Result type alias for clause and statement rendering
pub type ClauseResult<T> = Result<T, ClauseError>;

/// Broad category of a [`ClauseError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required input was not passed at all.
    MissingInput,
    /// An input was passed but cannot be resolved to a usable clause.
    MalformedInput,
    /// A call target was passed but is not a routine name.
    InvalidTarget,
    /// `UPDATE` was requested without a condition.
    MissingCondition,
}

/// Error types for clause parsing and statement building.
///
/// Every message is prefixed with the operation that raised it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseError {
    /// No table passed to `parse_table`
    #[error("[parse_table] no table name passed for the statement")]
    MissingTableTarget,

    /// Table passed to `parse_table` resolves to nothing
    #[error("[parse_table] table name for the statement is not specified")]
    TableNotSpecified,

    /// INSERT/UPDATE builders require a plain table name
    #[error("[{0}] no table name passed for the statement")]
    StatementTableMissing(&'static str),

    /// No values passed to `parse_insert_values`
    #[error("[parse_insert_values] no columns and values passed for the INSERT statement")]
    InsertValuesMissing,

    /// Values passed to `parse_insert_values` have an unusable shape
    #[error("[parse_insert_values] columns and values for the INSERT statement are malformed")]
    InsertValuesMalformed,

    /// No values passed to `parse_update_values`
    #[error("[parse_update_values] no columns and values passed for the UPDATE statement")]
    UpdateValuesMissing,

    /// Values passed to `parse_update_values` have an unusable shape
    #[error("[parse_update_values] columns and values for the UPDATE statement are malformed")]
    UpdateValuesMalformed,

    /// `query_update` called without a WHERE condition
    #[error("[query_update] no condition passed for the UPDATE statement")]
    UpdateConditionMissing,

    /// No routine passed to `parse_call`
    #[error("[parse_call] no call target passed for the statement")]
    CallTargetMissing,

    /// Routine passed to `parse_call` is not a name
    #[error("[parse_call] call target for the statement is not specified")]
    CallTargetInvalid,

    /// Parameters passed to `parse_call` have an unusable shape
    #[error("[parse_call] parameters for the CALL statement are malformed")]
    CallParametersInvalid,
}

impl ClauseError {
    /// Category of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingTableTarget
            | Self::StatementTableMissing(_)
            | Self::InsertValuesMissing
            | Self::UpdateValuesMissing
            | Self::CallTargetMissing => ErrorKind::MissingInput,
            Self::TableNotSpecified
            | Self::InsertValuesMalformed
            | Self::UpdateValuesMalformed
            | Self::CallParametersInvalid => ErrorKind::MalformedInput,
            Self::CallTargetInvalid => ErrorKind::InvalidTarget,
            Self::UpdateConditionMissing => ErrorKind::MissingCondition,
        }
    }

    /// Name of the parser or builder that raised this error.
    pub fn origin(&self) -> &'static str {
        match self {
            Self::MissingTableTarget | Self::TableNotSpecified => "parse_table",
            Self::StatementTableMissing(origin) => origin,
            Self::InsertValuesMissing | Self::InsertValuesMalformed => "parse_insert_values",
            Self::UpdateValuesMissing | Self::UpdateValuesMalformed => "parse_update_values",
            Self::UpdateConditionMissing => "query_update",
            Self::CallTargetMissing | Self::CallTargetInvalid | Self::CallParametersInvalid => {
                "parse_call"
            }
        }
    }

    /// Check if a required input was absent
    pub fn is_missing(&self) -> bool {
        matches!(self.kind(), ErrorKind::MissingInput)
    }

    /// Check if an input was present but unusable
    pub fn is_malformed(&self) -> bool {
        matches!(self.kind(), ErrorKind::MalformedInput)
    }
}
