//! # clausekit
//!
//! Render MySQL/MariaDB-style SQL clauses and statements from loosely-typed
//! values.
//!
//! ## Features
//!
//! - **One input type**: every argument is a [`Value`] (text, number, list or
//!   ordered map), so the same parser accepts `"age, name"`, `["age", "name"]`
//!   or `{age: .., name: ..}`
//! - **Composable fragments**: each `parse_*` function returns a fragment that
//!   is empty or starts with a single space
//! - **All-or-nothing statements**: builders return the first clause error and
//!   never partial SQL
//! - **Safe defaults**: UPDATE requires WHERE
//! - **Tracing**: rendered statements are logged at `debug` under the
//!   `clausekit.sql` target (feature `tracing`, on by default)
//!
//! No connection or execution: the output is a SQL string (and, for `CALL`,
//! the parameter values to bind).
//!
//! ## Example
//!
//! ```
//! use clausekit::{Map, Value, query_call, query_select_join, query_update};
//!
//! let condition: Map = [("age", Value::Int(24))].into_iter().collect();
//! let sql = query_select_join(
//!     "member",
//!     "INNER",
//!     "country",
//!     "member.countryIdx = country.idx",
//!     ["name"],
//!     condition,
//!     (),
//!     (),
//! )?;
//! assert_eq!(
//!     sql,
//!     "SELECT name FROM member INNER JOIN country ON member.countryIdx = country.idx WHERE (age = 24)"
//! );
//!
//! let sql = query_update("member", r"dateMod = \NOW()", "idx = 7")?;
//! assert_eq!(sql, "UPDATE member SET dateMod = NOW() WHERE idx = 7");
//!
//! let call = query_call("add_member", ["Aiden", "24"])?;
//! assert_eq!(call.query, "CALL add_member(?, ?)");
//! # Ok::<(), clausekit::ClauseError>(())
//! ```

pub mod clause;
pub mod error;
pub mod query;
pub mod value;

pub use clause::{
    parse_call, parse_columns, parse_group, parse_insert_values, parse_join, parse_limit,
    parse_order, parse_parameters, parse_table, parse_update_values, parse_where,
};
pub use error::{ClauseError, ClauseResult, ErrorKind};
pub use query::{
    CallQuery, CallStatement, InsertQuery, SelectQuery, Statement, StatementKind, UpdateQuery,
    query_call, query_insert, query_select, query_select_group, query_select_join,
    query_select_join_group, query_update,
};
pub use value::{Map, Value, add_quotes};
