//! Alias columns: `(<expr>) AS <name>` in a SELECT list.
//!
//! An alias names an output; it is not a composable term, so it does not
//! implement [`Expression`]. Outside the column list it serializes as its
//! escaped name only.

use super::Column;
use crate::dialect::{write_escaped, Dialect};
use crate::error::BuilderError;
use crate::query::expression::{Expression, SerializeSql};
use crate::query::identifier::valid_identifier_name;

/// Representation of aliased clauses (expression AS name)
pub struct AliasColumn<'e> {
    name: String,
    expression: Option<Box<dyn Expression + 'e>>,
}

/// Alias `expression` as `name`.
///
/// No validation happens here; an invalid name is reported when the column
/// list is serialized.
///
/// # Example
///
/// ```
/// use sqlcolumns::{alias, int_column, sql_func, Column, Nullability, SqlDialect};
///
/// let id = int_column("id", Nullability::NotNullable);
/// let total = alias("total", sql_func("COUNT", vec![Box::new(&id)]));
///
/// let mut out = String::new();
/// total.serialize_sql_for_column_list(true, &SqlDialect::MySql, &mut out).unwrap();
/// assert_eq!(out, "(COUNT(`id`)) AS `total`");
/// ```
pub fn alias<'e>(name: impl Into<String>, expression: impl Expression + 'e) -> AliasColumn<'e> {
    AliasColumn::new(name, Some(Box::new(expression)))
}

impl<'e> AliasColumn<'e> {
    /// Build an alias whose expression may be absent.
    pub fn new(name: impl Into<String>, expression: Option<Box<dyn Expression + 'e>>) -> Self {
        Self {
            name: name.into(),
            expression,
        }
    }
}

impl std::fmt::Debug for AliasColumn<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AliasColumn")
            .field("name", &self.name)
            .field("has_expression", &self.expression.is_some())
            .finish()
    }
}

impl Column for AliasColumn<'_> {
    fn name(&self) -> &str {
        &self.name
    }

    fn serialize_sql_for_column_list(
        &self,
        _include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) -> Result<(), BuilderError> {
        if !valid_identifier_name(&self.name) {
            return Err(BuilderError::InvalidAliasName {
                name: self.name.clone(),
                generated_sql: out.clone(),
            });
        }
        let expression = match &self.expression {
            Some(expression) => expression,
            None => {
                return Err(BuilderError::NilAliasExpression {
                    generated_sql: out.clone(),
                })
            }
        };

        out.push('(');
        expression.serialize_sql(dialect, out)?;
        out.push_str(") AS ");
        write_escaped(dialect, &self.name, out);
        Ok(())
    }

    fn set_table_name(&mut self, _table: &str) -> Result<(), BuilderError> {
        Err(BuilderError::TableNameNotSettable {
            kind: "alias",
            name: self.name.clone(),
        })
    }
}

impl SerializeSql for AliasColumn<'_> {
    /// Refers to the alias by its output name.
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        write_escaped(dialect, &self.name, out);
        Ok(())
    }
}
