//! Statement builders.
//!
//! Each builder holds the raw [`Value`](crate::Value) arguments of one
//! statement and renders them through the clause parsers when built.
//! Rendering is all-or-nothing: the first clause error is returned and no
//! partial SQL is produced.
//!
//! The `query_*` functions are positional shorthands over the builders; pass
//! `()` for any argument that should be left out.

mod call;
mod format;
mod insert;
mod select;
mod traits;
mod update;

pub use call::{CallQuery, CallStatement, query_call};
pub use format::StatementKind;
pub use insert::{InsertQuery, query_insert};
pub use select::{
    SelectQuery, query_select, query_select_group, query_select_join, query_select_join_group,
};
pub use traits::Statement;
pub use update::{UpdateQuery, query_update};

#[cfg(test)]
mod tests;
