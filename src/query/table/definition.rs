//! Table definition metadata for query generation.
//!
//! This module provides `Table`, which owns a fixed list of typed columns
//! bound to the table's name, and the `ColumnLookup` capability used by
//! deferred lookup columns to find a column by name.

use crate::error::BuilderError;
use crate::query::column::{Column, DeferredLookupColumn, NonAliasColumn};
use crate::query::identifier::valid_identifier_name;
use std::collections::HashMap;
use std::rc::Rc;

/// Name-based column lookup
///
/// Implemented by [`Table`]; anything else that can resolve a column by
/// name (a lazily built schema, a test double) may implement it too.
pub trait ColumnLookup {
    /// Table name, used in diagnostics
    fn name(&self) -> &str;

    /// Find the column called `name`
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::ColumnNotFound` if the table has no such column.
    fn get_column(&self, name: &str) -> Result<Rc<dyn NonAliasColumn>, BuilderError>;
}

/// Representation of a table for query generation
pub struct Table {
    name: String,
    columns: Vec<Rc<dyn NonAliasColumn>>,
    column_lookup: HashMap<String, Rc<dyn NonAliasColumn>>,
}

impl Table {
    /// Define a table and bind each column to it.
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a valid identifier, if `columns` is empty,
    /// if two columns share a name, or if a column cannot be bound to a
    /// table (alias and lookup columns).
    ///
    /// # Example
    ///
    /// ```
    /// use sqlcolumns::{int_column, Nullability, SerializeSql, SqlDialect, Table};
    ///
    /// let users = Table::new("users", vec![Box::new(int_column("id", Nullability::NotNullable))]);
    /// let id = users.c("id");
    ///
    /// let mut out = String::new();
    /// id.serialize_sql(&SqlDialect::MySql, &mut out).unwrap();
    /// assert_eq!(out, "`users`.`id`");
    /// ```
    pub fn new(name: impl Into<String>, columns: Vec<Box<dyn NonAliasColumn>>) -> Self {
        let name = name.into();
        if !valid_identifier_name(&name) {
            panic!("Invalid table name: {}", name);
        }
        if columns.is_empty() {
            panic!("Table {} has no columns", name);
        }

        let mut table = Self {
            name,
            columns: Vec::with_capacity(columns.len()),
            column_lookup: HashMap::with_capacity(columns.len()),
        };

        for mut column in columns {
            if let Err(e) = column.set_table_name(&table.name) {
                panic!("Cannot add column to table {}: {}", table.name, e);
            }
            let column: Rc<dyn NonAliasColumn> = Rc::from(column);
            let column_name = column.name().to_string();
            if table.column_lookup.contains_key(&column_name) {
                panic!("Duplicate column {} in table {}", column_name, table.name);
            }
            table.column_lookup.insert(column_name, Rc::clone(&column));
            table.columns.push(column);
        }

        log::debug!(
            "defined table '{}' with {} column(s)",
            table.name,
            table.columns.len()
        );
        table
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Columns in definition order
    pub fn columns(&self) -> &[Rc<dyn NonAliasColumn>] {
        &self.columns
    }

    /// Reference a column by name; the lookup happens on first serialization.
    pub fn c(&self, name: impl Into<String>) -> DeferredLookupColumn<'_> {
        DeferredLookupColumn::new(self, name)
    }
}

impl ColumnLookup for Table {
    fn name(&self) -> &str {
        &self.name
    }

    fn get_column(&self, name: &str) -> Result<Rc<dyn NonAliasColumn>, BuilderError> {
        self.column_lookup
            .get(name)
            .cloned()
            .ok_or_else(|| BuilderError::ColumnNotFound {
                table: self.name.clone(),
                column: name.to_string(),
            })
    }
}

impl std::fmt::Debug for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.columns.iter().map(|c| c.name()).collect();
        f.debug_struct("Table")
            .field("name", &self.name)
            .field("columns", &names)
            .finish()
    }
}
