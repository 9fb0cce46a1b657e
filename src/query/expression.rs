//! Expression capabilities and a few concrete expressions.
//!
//! Anything that can write itself as SQL implements [`SerializeSql`].
//! [`Expression`] and [`OrderByTarget`] mark where such a term may be used:
//! inside a larger expression, or as an ORDER BY target.

use crate::dialect::Dialect;
use crate::error::BuilderError;
use crate::query::identifier::valid_identifier_name;
use std::rc::Rc;

/// SQL text generation into a caller-supplied buffer
pub trait SerializeSql {
    /// Append this term's SQL to `out`
    ///
    /// # Errors
    ///
    /// Returns the first error encountered; `out` may hold partial output.
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError>;
}

/// A composable SQL term (columns, literals, function calls)
pub trait Expression: SerializeSql {}

/// A term usable in an ORDER BY clause
pub trait OrderByTarget: SerializeSql {}

impl<T: SerializeSql + ?Sized> SerializeSql for &T {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        (**self).serialize_sql(dialect, out)
    }
}

impl<T: SerializeSql + ?Sized> SerializeSql for Box<T> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        (**self).serialize_sql(dialect, out)
    }
}

impl<T: SerializeSql + ?Sized> SerializeSql for Rc<T> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        (**self).serialize_sql(dialect, out)
    }
}

impl<T: Expression + ?Sized> Expression for &T {}
impl<T: Expression + ?Sized> Expression for Box<T> {}
impl<T: Expression + ?Sized> Expression for Rc<T> {}

impl<T: OrderByTarget + ?Sized> OrderByTarget for &T {}
impl<T: OrderByTarget + ?Sized> OrderByTarget for Box<T> {}
impl<T: OrderByTarget + ?Sized> OrderByTarget for Rc<T> {}

/// Verbatim SQL fragment
///
/// The text is emitted unchanged; it is never quoted or validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawExpression {
    sql: String,
}

/// Build a [`RawExpression`]
pub fn raw(sql: impl Into<String>) -> RawExpression {
    RawExpression { sql: sql.into() }
}

impl SerializeSql for RawExpression {
    fn serialize_sql(&self, _dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        out.push_str(&self.sql);
        Ok(())
    }
}

impl Expression for RawExpression {}
impl OrderByTarget for RawExpression {}

/// SQL function call: `NAME(arg, arg, ...)`
pub struct FunctionExpression<'e> {
    name: String,
    args: Vec<Box<dyn Expression + 'e>>,
}

/// Build a function call expression
///
/// # Example
///
/// ```
/// use sqlcolumns::{int_column, sql_func, Nullability, SerializeSql, SqlDialect};
///
/// let id = int_column("id", Nullability::NotNullable);
/// let count = sql_func("COUNT", vec![Box::new(&id)]);
///
/// let mut out = String::new();
/// count.serialize_sql(&SqlDialect::MySql, &mut out).unwrap();
/// assert_eq!(out, "COUNT(`id`)");
/// ```
pub fn sql_func<'e>(
    name: impl Into<String>,
    args: Vec<Box<dyn Expression + 'e>>,
) -> FunctionExpression<'e> {
    FunctionExpression {
        name: name.into(),
        args,
    }
}

impl SerializeSql for FunctionExpression<'_> {
    fn serialize_sql(&self, dialect: &dyn Dialect, out: &mut String) -> Result<(), BuilderError> {
        if !valid_identifier_name(&self.name) {
            return Err(BuilderError::InvalidIdentifier {
                kind: "function",
                name: self.name.clone(),
                generated_sql: out.clone(),
            });
        }

        out.push_str(&self.name);
        out.push('(');
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                out.push_str(", ");
            }
            arg.serialize_sql(dialect, out)?;
        }
        out.push(')');
        Ok(())
    }
}

impl Expression for FunctionExpression<'_> {}
impl OrderByTarget for FunctionExpression<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::SqlDialect;

    struct FailingExpression;

    impl SerializeSql for FailingExpression {
        fn serialize_sql(&self, _dialect: &dyn Dialect, _out: &mut String) -> Result<(), BuilderError> {
            Err(BuilderError::Other("boom".to_string()))
        }
    }

    impl Expression for FailingExpression {}

    #[test]
    fn test_raw_expression_is_verbatim() {
        let mut out = String::new();
        raw("NOW()").serialize_sql(&SqlDialect::Postgres, &mut out).unwrap();
        assert_eq!(out, "NOW()");
    }

    #[test]
    fn test_function_joins_arguments() {
        let f = sql_func("COALESCE", vec![Box::new(raw("a")), Box::new(raw("0"))]);
        let mut out = String::new();
        f.serialize_sql(&SqlDialect::MySql, &mut out).unwrap();
        assert_eq!(out, "COALESCE(a, 0)");
    }

    #[test]
    fn test_function_without_arguments() {
        let f = sql_func("NOW", Vec::new());
        let mut out = String::new();
        f.serialize_sql(&SqlDialect::MySql, &mut out).unwrap();
        assert_eq!(out, "NOW()");
    }

    #[test]
    fn test_function_rejects_invalid_name() {
        let f = sql_func("DROP TABLE", Vec::new());
        let mut out = String::from("SELECT ");
        let err = f.serialize_sql(&SqlDialect::MySql, &mut out).unwrap_err();
        assert!(matches!(err, BuilderError::InvalidIdentifier { kind: "function", .. }));
        assert_eq!(err.generated_sql(), Some("SELECT "));
    }

    #[test]
    fn test_function_propagates_argument_error() {
        let f = sql_func("SUM", vec![Box::new(FailingExpression)]);
        let mut out = String::new();
        let err = f.serialize_sql(&SqlDialect::MySql, &mut out).unwrap_err();
        assert_eq!(err, BuilderError::Other("boom".to_string()));
    }
}
