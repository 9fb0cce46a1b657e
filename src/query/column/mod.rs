//! Typed column references.
//!
//! This module provides the [`Column`] capability and its concrete kinds:
//! typed table columns, alias columns and deferred lookups.
//!
//! # Structure
//!
//! - `base`: shared state and serialization for materialized columns
//! - `typed`: the typed column kinds and their constructors
//! - `alias`: `(expr) AS name` output columns
//! - `deferred`: columns resolved by name against a table on first use

mod base;
pub mod alias;
pub mod deferred;
pub mod typed;

use crate::dialect::Dialect;
use crate::error::BuilderError;
use crate::query::expression::{Expression, OrderByTarget, SerializeSql};

pub use alias::{alias, AliasColumn};
pub use deferred::DeferredLookupColumn;
pub use typed::{
    bool_column, bytes_column, date_time_column, double_column, int_column, str_column,
    BoolColumn, BytesColumn, DateTimeColumn, DoubleColumn, IntColumn, StrColumn,
};

/// A named SQL value reference that can serialize itself
///
/// `serialize_sql` (from [`SerializeSql`]) is used when the column appears
/// in an expression; `serialize_sql_for_column_list` when it appears in a
/// SELECT list.
pub trait Column: SerializeSql {
    /// Column name (the output alias for alias columns)
    fn name(&self) -> &str;

    /// Serialization for use in column lists
    ///
    /// # Errors
    ///
    /// Returns `BuilderError` if this column or a wrapped expression cannot
    /// be serialized.
    fn serialize_sql_for_column_list(
        &self,
        include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) -> Result<(), BuilderError>;

    /// Bind this column to the table (or FROM-clause alias) it belongs to.
    ///
    /// Called by the table layer only. Later calls overwrite earlier ones.
    #[doc(hidden)]
    fn set_table_name(&mut self, table: &str) -> Result<(), BuilderError>;
}

/// A column that can be referred to outside of the projection list
pub trait NonAliasColumn: Column + Expression + OrderByTarget {}

/// Whether a column accepts NULL
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nullability {
    Nullable,
    NotNullable,
}

impl From<bool> for Nullability {
    fn from(nullable: bool) -> Self {
        if nullable {
            Nullability::Nullable
        } else {
            Nullability::NotNullable
        }
    }
}

/// Semantic type tag of a materialized column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColumnKind {
    /// VARBINARY/BLOB
    Bytes,
    /// VARCHAR/TEXT
    Str,
    DateTime,
    Int,
    Double,
    /// TINYINT used as a bool
    Bool,
}

/// Character set of a string column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Charset {
    Utf8,
}

impl Charset {
    pub fn as_str(&self) -> &'static str {
        match self {
            Charset::Utf8 => "utf8",
        }
    }
}

/// Collation of a string column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collation {
    Utf8CaseInsensitive,
    Utf8CaseSensitive,
    Utf8Binary,
}

impl Collation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Collation::Utf8CaseInsensitive => "utf8_unicode_ci",
            Collation::Utf8CaseSensitive => "utf8_unicode",
            Collation::Utf8Binary => "utf8_bin",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nullability_from_bool() {
        assert_eq!(Nullability::from(true), Nullability::Nullable);
        assert_eq!(Nullability::from(false), Nullability::NotNullable);
    }

    #[test]
    fn test_charset_and_collation_names() {
        assert_eq!(Charset::Utf8.as_str(), "utf8");
        assert_eq!(Collation::Utf8CaseInsensitive.as_str(), "utf8_unicode_ci");
        assert_eq!(Collation::Utf8CaseSensitive.as_str(), "utf8_unicode");
        assert_eq!(Collation::Utf8Binary.as_str(), "utf8_bin");
    }
}
