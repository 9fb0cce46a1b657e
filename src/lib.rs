//! # sqlcolumns
//!
//! Typed SQL column references and expressions that serialize themselves to
//! dialect-correct SQL text.
//!
//! Columns are defined once per table, referenced directly or by name through
//! [`Table::c`], wrapped in aliases, and written into a caller-supplied
//! buffer by the clause and statement layers.

pub mod config;
pub mod dialect;
pub mod error;
pub mod query;

pub use crate::config::BuilderConfig;
pub use dialect::{Dialect, SqlDialect};
pub use error::BuilderError;
pub use query::*;
