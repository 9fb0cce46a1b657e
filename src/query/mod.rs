//! Column and expression composition.
//!
//! This module provides the building blocks the clause and statement layers
//! serialize into SQL text.
//!
//! # Architecture
//!
//! - **Identifier**: validation of unquoted identifier names
//! - **Expression**: the `SerializeSql` capability and composable terms
//! - **Column**: typed columns, alias columns and deferred lookups
//! - **Table**: table definitions and name-based column lookup
//!
//! # Examples
//!
//! ```
//! use sqlcolumns::{alias, int_column, sql_func, Column, Nullability, SqlDialect, Table};
//!
//! let orders = Table::new("orders", vec![Box::new(int_column("id", Nullability::NotNullable))]);
//! let order_count = alias("order_count", sql_func("COUNT", vec![Box::new(orders.c("id"))]));
//!
//! let mut out = String::from("SELECT ");
//! order_count
//!     .serialize_sql_for_column_list(true, &SqlDialect::MySql, &mut out)
//!     .unwrap();
//! assert_eq!(out, "SELECT (COUNT(`orders`.`id`)) AS `order_count`");
//! ```

// Identifier validation
pub mod identifier;
#[doc(inline)]
pub use identifier::valid_identifier_name;

// Serialization capability and expressions
pub mod expression;
#[doc(inline)]
pub use expression::{raw, sql_func, Expression, FunctionExpression, OrderByTarget, RawExpression, SerializeSql};

// Column kinds
pub mod column;
#[doc(inline)]
pub use column::{
    alias, bool_column, bytes_column, date_time_column, double_column, int_column, str_column,
    AliasColumn, BoolColumn, BytesColumn, Charset, Collation, Column, ColumnKind, DateTimeColumn,
    DeferredLookupColumn, DoubleColumn, IntColumn, NonAliasColumn, Nullability, StrColumn,
};

// Table definitions
pub mod table;
#[doc(inline)]
pub use table::{ColumnLookup, Table};
