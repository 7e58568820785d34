use thiserror::Error;

const MAX_EMBEDDED_QUERY_CHARS: usize = 100;
const TRUNCATION_MARKER: &str = "...";

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DatabaseError {
    #[error("{0}")]
    Generic(String),

    #[error("Failed to establish database connection")]
    ConnectionFailed,

    #[error("Database query '{query}' failed: {cause}")]
    QueryFailed { query: String, cause: String },

    #[error("Database transaction failed during {operation}: {cause}")]
    TransactionFailed { operation: String, cause: String },

    #[error("Database constraint violation: {constraint} on table {table}")]
    ConstraintViolation { constraint: String, table: String },

    #[error("Database operation '{operation}' timed out after {timeout_ms}ms")]
    Timeout { operation: String, timeout_ms: u64 },
}

impl DatabaseError {
    /// Builds a query failure; query text longer than 100 characters is cut and
    /// suffixed with `...`.
    pub fn query_failed(query: impl AsRef<str>, cause: impl Into<String>) -> Self {
        DatabaseError::QueryFailed {
            query: truncate_query(query.as_ref()),
            cause: cause.into(),
        }
    }

    pub fn transaction_failed(operation: impl Into<String>, cause: impl Into<String>) -> Self {
        DatabaseError::TransactionFailed {
            operation: operation.into(),
            cause: cause.into(),
        }
    }

    pub fn constraint_violation(constraint: impl Into<String>, table: impl Into<String>) -> Self {
        DatabaseError::ConstraintViolation {
            constraint: constraint.into(),
            table: table.into(),
        }
    }

    pub fn timeout(operation: impl Into<String>, timeout_ms: u64) -> Self {
        DatabaseError::Timeout {
            operation: operation.into(),
            timeout_ms,
        }
    }

    pub fn error_code(&self) -> Option<&'static str> {
        match self {
            DatabaseError::Generic(_) => None,
            DatabaseError::ConnectionFailed => Some("DB_CONNECTION_FAILED"),
            DatabaseError::QueryFailed { .. } => Some("DB_QUERY_FAILED"),
            DatabaseError::TransactionFailed { .. } => Some("DB_TRANSACTION_FAILED"),
            DatabaseError::ConstraintViolation { .. } => Some("DB_CONSTRAINT_VIOLATION"),
            DatabaseError::Timeout { .. } => Some("DB_TIMEOUT"),
        }
    }
}

fn truncate_query(query: &str) -> String {
    if query.chars().count() <= MAX_EMBEDDED_QUERY_CHARS {
        return query.to_string();
    }

    let mut truncated: String = query.chars().take(MAX_EMBEDDED_QUERY_CHARS).collect();
    truncated.push_str(TRUNCATION_MARKER);
    truncated
}
