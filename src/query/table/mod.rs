//! Table definitions and column lookup by name.

pub mod definition;

pub use definition::{ColumnLookup, Table};
