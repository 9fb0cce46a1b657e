//! Error types for column and expression serialization.
//!
//! Serialization failures carry the SQL generated so far, so callers can see
//! where in the statement the builder stopped.

/// Error type for SQL serialization
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuilderError {
    /// Alias name is not a valid identifier
    InvalidAliasName { name: String, generated_sql: String },
    /// Alias wraps no expression
    NilAliasExpression { generated_sql: String },
    /// `set_table_name` called on a column that has no table slot
    TableNameNotSettable { kind: &'static str, name: String },
    /// Table has no column with the requested name
    ColumnNotFound { table: String, column: String },
    /// Some other identifier (e.g. a function name) is not valid
    InvalidIdentifier {
        kind: &'static str,
        name: String,
        generated_sql: String,
    },
    /// Other error
    Other(String),
}

impl BuilderError {
    /// SQL generated before the failure, when the error recorded it
    pub fn generated_sql(&self) -> Option<&str> {
        match self {
            BuilderError::InvalidAliasName { generated_sql, .. }
            | BuilderError::NilAliasExpression { generated_sql }
            | BuilderError::InvalidIdentifier { generated_sql, .. } => Some(generated_sql),
            _ => None,
        }
    }
}

impl std::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuilderError::InvalidAliasName {
                name,
                generated_sql,
            } => write!(
                f,
                "invalid alias name `{}`. Generated sql: {}",
                name, generated_sql
            ),
            BuilderError::NilAliasExpression { generated_sql } => {
                write!(
                    f,
                    "cannot alias a nil expression. Generated sql: {}",
                    generated_sql
                )
            }
            BuilderError::TableNameNotSettable { kind, name } => write!(
                f,
                "{} column '{}' should never have set_table_name called on it",
                kind, name
            ),
            BuilderError::ColumnNotFound { table, column } => {
                write!(f, "no such column '{}' in table '{}'", column, table)
            }
            BuilderError::InvalidIdentifier {
                kind,
                name,
                generated_sql,
            } => write!(
                f,
                "invalid {} name `{}`. Generated sql: {}",
                kind, name, generated_sql
            ),
            BuilderError::Other(msg) => write!(f, "SQL builder error: {}", msg),
        }
    }
}

impl std::error::Error for BuilderError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_generated_sql() {
        let err = BuilderError::InvalidAliasName {
            name: "bad name".to_string(),
            generated_sql: "SELECT ".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "invalid alias name `bad name`. Generated sql: SELECT "
        );
        assert_eq!(err.generated_sql(), Some("SELECT "));
    }

    #[test]
    fn test_generated_sql_absent_for_lookup_errors() {
        let err = BuilderError::ColumnNotFound {
            table: "users".to_string(),
            column: "email".to_string(),
        };
        assert_eq!(err.generated_sql(), None);
        assert_eq!(err.to_string(), "no such column 'email' in table 'users'");
    }

    #[test]
    fn test_table_name_not_settable_message() {
        let err = BuilderError::TableNameNotSettable {
            kind: "alias",
            name: "total".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "alias column 'total' should never have set_table_name called on it"
        );
    }
}
