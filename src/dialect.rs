//! SQL dialect capability.
//!
//! Column serialization only needs one thing from a dialect: the character
//! used to delimit identifiers on both sides.

use serde::Deserialize;

/// Identifier quoting policy for a SQL variant
pub trait Dialect {
    /// Character written before and after every identifier
    fn escape_character(&self) -> char;
}

/// Built-in dialects
///
/// # Example
///
/// ```
/// use sqlcolumns::{Dialect, SqlDialect};
///
/// assert_eq!(SqlDialect::MySql.escape_character(), '`');
/// assert_eq!(SqlDialect::Postgres.escape_character(), '"');
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[default]
    MySql,
    #[serde(alias = "postgresql")]
    Postgres,
    Sqlite,
}

impl Dialect for SqlDialect {
    fn escape_character(&self) -> char {
        match self {
            SqlDialect::MySql => '`',
            SqlDialect::Postgres | SqlDialect::Sqlite => '"',
        }
    }
}

impl<D: Dialect + ?Sized> Dialect for &D {
    fn escape_character(&self) -> char {
        (**self).escape_character()
    }
}

/// Write `ident` wrapped in the dialect's escape character.
///
/// The identifier is written as-is; callers validate it beforehand.
pub fn write_escaped(dialect: &dyn Dialect, ident: &str, out: &mut String) {
    let esc = dialect.escape_character();
    out.push(esc);
    out.push_str(ident);
    out.push(esc);
}
