//! Shared state and serialization for materialized columns.

use super::{ColumnKind, Nullability};
use crate::dialect::{write_escaped, Dialect};

/// Name, nullability and owning table of a typed column
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BaseColumn {
    name: String,
    nullable: Nullability,
    kind: ColumnKind,
    // Empty means unqualified
    table: String,
}

impl BaseColumn {
    pub(crate) fn new(name: String, nullable: Nullability, kind: ColumnKind) -> Self {
        Self {
            name,
            nullable,
            kind,
            table: String::new(),
        }
    }

    pub(crate) fn name(&self) -> &str {
        &self.name
    }

    pub(crate) fn nullable(&self) -> Nullability {
        self.nullable
    }

    pub(crate) fn kind(&self) -> ColumnKind {
        self.kind
    }

    pub(crate) fn table_name(&self) -> Option<&str> {
        if self.table.is_empty() {
            None
        } else {
            Some(&self.table)
        }
    }

    /// Last write wins.
    pub(crate) fn set_table_name(&mut self, table: &str) {
        if !self.table.is_empty() && self.table != table {
            log::debug!(
                "column '{}' rebound from table '{}' to '{}'",
                self.name,
                self.table,
                table
            );
        }
        self.table = table.to_string();
    }

    pub(crate) fn write_column_list(
        &self,
        include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) {
        if include_table_name && !self.table.is_empty() {
            write_escaped(dialect, &self.table, out);
            out.push('.');
        }
        write_escaped(dialect, &self.name, out);
    }
}
