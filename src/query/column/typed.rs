//! Typed column kinds.
//!
//! Every kind wraps a `BaseColumn` and differs only in its semantic tag;
//! string columns additionally carry charset and collation metadata.
//!
//! The constructors panic when `name` is not a valid identifier: an invalid
//! column name in a schema definition is a programming error.

use super::base::BaseColumn;
use super::{Charset, Collation, Column, ColumnKind, NonAliasColumn, Nullability};
use crate::dialect::Dialect;
use crate::error::BuilderError;
use crate::query::expression::{Expression, OrderByTarget, SerializeSql};
use crate::query::identifier::valid_identifier_name;

macro_rules! impl_typed_column {
    ($ty:ident) => {
        impl $ty {
            pub fn nullable(&self) -> Nullability {
                self.base.nullable()
            }

            pub fn kind(&self) -> ColumnKind {
                self.base.kind()
            }

            /// Owning table qualifier, if the column has been bound to one
            pub fn table_name(&self) -> Option<&str> {
                self.base.table_name()
            }
        }

        impl Column for $ty {
            fn name(&self) -> &str {
                self.base.name()
            }

            fn serialize_sql_for_column_list(
                &self,
                include_table_name: bool,
                dialect: &dyn Dialect,
                out: &mut String,
            ) -> Result<(), BuilderError> {
                self.base.write_column_list(include_table_name, dialect, out);
                Ok(())
            }

            fn set_table_name(&mut self, table: &str) -> Result<(), BuilderError> {
                self.base.set_table_name(table);
                Ok(())
            }
        }

        impl SerializeSql for $ty {
            fn serialize_sql(
                &self,
                dialect: &dyn Dialect,
                out: &mut String,
            ) -> Result<(), BuilderError> {
                self.serialize_sql_for_column_list(true, dialect, out)
            }
        }

        impl Expression for $ty {}
        impl OrderByTarget for $ty {}
        impl NonAliasColumn for $ty {}
    };
}

fn checked_base(name: String, nullable: Nullability, kind: ColumnKind, label: &str) -> BaseColumn {
    if !valid_identifier_name(&name) {
        panic!("Invalid column name in {} column", label);
    }
    BaseColumn::new(name, nullable, kind)
}

/// Representation of VARBINARY/BLOB columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BytesColumn {
    base: BaseColumn,
}

impl_typed_column!(BytesColumn);

/// Create a bytes column. Panics if `name` is not a valid identifier.
pub fn bytes_column(name: impl Into<String>, nullable: Nullability) -> BytesColumn {
    BytesColumn {
        base: checked_base(name.into(), nullable, ColumnKind::Bytes, "bytes"),
    }
}

/// Representation of VARCHAR/TEXT columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrColumn {
    base: BaseColumn,
    charset: Charset,
    collation: Collation,
}

impl_typed_column!(StrColumn);

impl StrColumn {
    pub fn charset(&self) -> Charset {
        self.charset
    }

    pub fn collation(&self) -> Collation {
        self.collation
    }
}

/// Create a string column. Panics if `name` is not a valid identifier.
///
/// Charset and collation are metadata only; they do not change the
/// serialized column reference.
///
/// # Example
///
/// ```
/// use sqlcolumns::{str_column, Charset, Collation, Column, Nullability, SqlDialect};
///
/// let email = str_column("email", Charset::Utf8, Collation::Utf8Binary, Nullability::Nullable);
/// let mut out = String::new();
/// email.serialize_sql_for_column_list(true, &SqlDialect::Postgres, &mut out).unwrap();
/// assert_eq!(out, "\"email\"");
/// ```
pub fn str_column(
    name: impl Into<String>,
    charset: Charset,
    collation: Collation,
    nullable: Nullability,
) -> StrColumn {
    StrColumn {
        base: checked_base(name.into(), nullable, ColumnKind::Str, "str"),
        charset,
        collation,
    }
}

/// Representation of DateTime columns
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DateTimeColumn {
    base: BaseColumn,
}

impl_typed_column!(DateTimeColumn);

/// Create a datetime column. Panics if `name` is not a valid identifier.
pub fn date_time_column(name: impl Into<String>, nullable: Nullability) -> DateTimeColumn {
    DateTimeColumn {
        base: checked_base(name.into(), nullable, ColumnKind::DateTime, "datetime"),
    }
}

/// Representation of any integer column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntColumn {
    base: BaseColumn,
}

impl_typed_column!(IntColumn);

/// Create an integer column. Panics if `name` is not a valid identifier.
pub fn int_column(name: impl Into<String>, nullable: Nullability) -> IntColumn {
    IntColumn {
        base: checked_base(name.into(), nullable, ColumnKind::Int, "int"),
    }
}

/// Representation of any double column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoubleColumn {
    base: BaseColumn,
}

impl_typed_column!(DoubleColumn);

/// Create a double column. Panics if `name` is not a valid identifier.
pub fn double_column(name: impl Into<String>, nullable: Nullability) -> DoubleColumn {
    DoubleColumn {
        base: checked_base(name.into(), nullable, ColumnKind::Double, "double"),
    }
}

/// Representation of TINYINT used as a bool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoolColumn {
    base: BaseColumn,
}

impl_typed_column!(BoolColumn);

/// Create a bool column. Panics if `name` is not a valid identifier.
pub fn bool_column(name: impl Into<String>, nullable: Nullability) -> BoolColumn {
    BoolColumn {
        base: checked_base(name.into(), nullable, ColumnKind::Bool, "bool"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SqlDialect;

    fn column_list(col: &dyn Column, include_table_name: bool, dialect: SqlDialect) -> String {
        let mut out = String::new();
        col.serialize_sql_for_column_list(include_table_name, &dialect, &mut out)
            .unwrap();
        out
    }

    fn expr(col: &dyn Column, dialect: SqlDialect) -> String {
        let mut out = String::new();
        col.serialize_sql(&dialect, &mut out).unwrap();
        out
    }

    #[test]
    fn test_constructors_set_kind_and_nullability() {
        let b = bytes_column("b", Nullability::Nullable);
        assert_eq!((b.kind(), b.nullable()), (ColumnKind::Bytes, Nullability::Nullable));
        let d = date_time_column("d", Nullability::NotNullable);
        assert_eq!((d.kind(), d.nullable()), (ColumnKind::DateTime, Nullability::NotNullable));
        let i = int_column("i", Nullability::Nullable);
        assert_eq!((i.kind(), i.nullable()), (ColumnKind::Int, Nullability::Nullable));
        let f = double_column("f", Nullability::NotNullable);
        assert_eq!((f.kind(), f.nullable()), (ColumnKind::Double, Nullability::NotNullable));
        let t = bool_column("t", Nullability::Nullable);
        assert_eq!((t.kind(), t.nullable()), (ColumnKind::Bool, Nullability::Nullable));
        assert_eq!(t.name(), "t");
    }

    #[test]
    fn test_str_column_metadata() {
        let c = str_column("email", Charset::Utf8, Collation::Utf8CaseInsensitive, Nullability::NotNullable);
        assert_eq!(c.kind(), ColumnKind::Str);
        assert_eq!(c.charset(), Charset::Utf8);
        assert_eq!(c.collation(), Collation::Utf8CaseInsensitive);
        assert_eq!(c.nullable(), Nullability::NotNullable);
        assert_eq!(c.table_name(), None);
    }

    #[test]
    fn test_qualified_column_list() {
        let mut id = int_column("id", Nullability::NotNullable);
        id.set_table_name("users").unwrap();
        assert_eq!(column_list(&id, true, SqlDialect::MySql), "`users`.`id`");
        assert_eq!(column_list(&id, false, SqlDialect::MySql), "`id`");
        assert_eq!(column_list(&id, true, SqlDialect::Postgres), "\"users\".\"id\"");
    }

    #[test]
    fn test_expression_always_qualifies() {
        let mut id = int_column("id", Nullability::NotNullable);
        assert_eq!(expr(&id, SqlDialect::MySql), "`id`");
        id.set_table_name("users").unwrap();
        assert_eq!(expr(&id, SqlDialect::MySql), "`users`.`id`");
    }

    #[test]
    fn test_serialization_appends_to_buffer() {
        let name = str_column("name", Charset::Utf8, Collation::Utf8Binary, Nullability::Nullable);
        let mut out = String::from("SELECT ");
        name.serialize_sql(&SqlDialect::MySql, &mut out).unwrap();
        assert_eq!(out, "SELECT `name`");
    }

    #[test]
    #[should_panic(expected = "Invalid column name in int column")]
    fn test_int_column_rejects_invalid_name() {
        int_column("1id", Nullability::NotNullable);
    }

    #[test]
    #[should_panic(expected = "Invalid column name in str column")]
    fn test_str_column_rejects_invalid_name() {
        str_column("first name", Charset::Utf8, Collation::Utf8Binary, Nullability::Nullable);
    }

    #[test]
    #[should_panic(expected = "Invalid column name in bytes column")]
    fn test_bytes_column_rejects_empty_name() {
        bytes_column("", Nullability::Nullable);
    }

    #[test]
    #[should_panic(expected = "Invalid column name in datetime column")]
    fn test_date_time_column_rejects_invalid_name() {
        date_time_column("created-at", Nullability::Nullable);
    }

    #[test]
    #[should_panic(expected = "Invalid column name in double column")]
    fn test_double_column_rejects_invalid_name() {
        double_column("price$", Nullability::Nullable);
    }

    #[test]
    #[should_panic(expected = "Invalid column name in bool column")]
    fn test_bool_column_rejects_invalid_name() {
        bool_column("is.active", Nullability::Nullable);
    }
}
