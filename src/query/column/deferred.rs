//! Columns looked up by name against a table on first use.
//!
//! A `DeferredLookupColumn` starts unresolved. The first serialization asks
//! the table for the named column and caches the result; every later
//! serialization reuses the cached column without consulting the table.
//! A failed lookup is not cached, so serialization can be retried once the
//! table knows the column.

use super::{Column, NonAliasColumn};
use crate::dialect::Dialect;
use crate::error::BuilderError;
use crate::query::expression::{Expression, OrderByTarget, SerializeSql};
use crate::query::table::ColumnLookup;
use once_cell::unsync::OnceCell;
use std::rc::Rc;

/// Pseudo column returned by [`Table::c`](crate::query::table::Table::c)
///
/// Holds a borrowed reference to its table; the table must outlive it.
pub struct DeferredLookupColumn<'t> {
    table: &'t dyn ColumnLookup,
    col_name: String,
    cached_column: OnceCell<Rc<dyn NonAliasColumn>>,
}

impl<'t> DeferredLookupColumn<'t> {
    pub fn new(table: &'t dyn ColumnLookup, col_name: impl Into<String>) -> Self {
        Self {
            table,
            col_name: col_name.into(),
            cached_column: OnceCell::new(),
        }
    }

    /// Whether the column has been looked up successfully
    pub fn is_resolved(&self) -> bool {
        self.cached_column.get().is_some()
    }

    fn resolve(&self) -> Result<&Rc<dyn NonAliasColumn>, BuilderError> {
        if let Some(column) = self.cached_column.get() {
            log::trace!(
                "deferred column '{}' served from cache for table '{}'",
                self.col_name,
                self.table.name()
            );
            return Ok(column);
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "resolve_deferred_column",
            table = self.table.name(),
            column = %self.col_name
        )
        .entered();

        match self.table.get_column(&self.col_name) {
            Ok(column) => {
                log::debug!(
                    "resolved deferred column '{}' against table '{}'",
                    self.col_name,
                    self.table.name()
                );
                Ok(self.cached_column.get_or_init(|| column))
            }
            Err(e) => {
                log::debug!(
                    "deferred column '{}' unresolved in table '{}': {}",
                    self.col_name,
                    self.table.name(),
                    e
                );
                Err(e)
            }
        }
    }
}

impl std::fmt::Debug for DeferredLookupColumn<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeferredLookupColumn")
            .field("table", &self.table.name())
            .field("col_name", &self.col_name)
            .field("resolved", &self.is_resolved())
            .finish()
    }
}

impl Column for DeferredLookupColumn<'_> {
    fn name(&self) -> &str {
        &self.col_name
    }

    /// The resolved column carries its own table qualifier.
    fn serialize_sql_for_column_list(
        &self,
        _include_table_name: bool,
        dialect: &dyn Dialect,
        out: &mut String,
    ) -> Result<(), BuilderError> {
        self.serialize_sql(dialect, out)
    }

    fn set_table_name(&mut self, _table: &str) -> Result<(), BuilderError> {
        Err(BuilderError::TableNameNotSettable {
            kind: "lookup",
            name: self.col_name.clone(),
        })
    }
}

impl SerializeSql for DeferredLookupColumn<'_> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        self.resolve()?.serialize_sql(dialect, out)
    }
}

impl Expression for DeferredLookupColumn<'_> {}
impl OrderByTarget for DeferredLookupColumn<'_> {}
impl NonAliasColumn for DeferredLookupColumn<'_> {}
