use std::collections::BTreeMap;

use axum::http::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;
use validator::ValidationErrors;

use crate::shared::domain::model::{
    enums::{database_error::DatabaseError, problem_type::ProblemType},
    value_objects::problem_detail::ProblemDetail,
};

/// Error taxonomy shared by every bounded context.
///
/// Each variant maps to exactly one problem type and one HTTP status.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ApiError {
    #[error("{detail}")]
    Validation {
        detail: String,
        extensions: Map<String, Value>,
    },

    #[error("{detail}")]
    Business {
        detail: String,
        extensions: Map<String, Value>,
    },

    #[error(transparent)]
    Database(#[from] DatabaseError),

    #[error("{0}")]
    Authentication(String),

    #[error("{0}")]
    Authorization(String),

    #[error("{resource} with identifier '{}' not found", display_identifier(.identifier))]
    NotFound { resource: String, identifier: Value },

    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    pub fn validation(detail: impl Into<String>) -> Self {
        ApiError::Validation {
            detail: detail.into(),
            extensions: Map::new(),
        }
    }

    pub fn business(detail: impl Into<String>) -> Self {
        ApiError::Business {
            detail: detail.into(),
            extensions: Map::new(),
        }
    }

    pub fn authentication() -> Self {
        ApiError::Authentication("Authentication failed".to_string())
    }

    pub fn authorization() -> Self {
        ApiError::Authorization("Insufficient permissions".to_string())
    }

    pub fn not_found(resource: impl Into<String>, identifier: impl Into<Value>) -> Self {
        ApiError::NotFound {
            resource: resource.into(),
            identifier: identifier.into(),
        }
    }

    pub fn internal(detail: impl Into<String>) -> Self {
        ApiError::Internal(detail.into())
    }

    /// Attaches an extra problem member to validation and business errors.
    /// Other variants carry a fixed member set and are returned unchanged.
    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        match &mut self {
            ApiError::Validation { extensions, .. } | ApiError::Business { extensions, .. } => {
                extensions.insert(key.into(), value.into());
            }
            _ => {}
        }
        self
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Validation { .. } => StatusCode::BAD_REQUEST,
            ApiError::Business { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ApiError::Authorization(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound { .. } => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn problem_type(&self) -> ProblemType {
        match self {
            ApiError::Validation { .. } => ProblemType::ValidationError,
            ApiError::Business { .. } => ProblemType::BusinessError,
            ApiError::Database(_) => ProblemType::DatabaseError,
            ApiError::Authentication(_) => ProblemType::AuthenticationError,
            ApiError::Authorization(_) => ProblemType::AuthorizationError,
            ApiError::NotFound { .. } => ProblemType::NotFoundError,
            ApiError::Internal(_) => ProblemType::InternalServerError,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            ApiError::Validation { .. } => "Validation Error",
            ApiError::Business { .. } => "Business Logic Error",
            ApiError::Database(_) => "Database Error",
            ApiError::Authentication(_) => "Authentication Error",
            ApiError::Authorization(_) => "Authorization Error",
            ApiError::NotFound { .. } => "Resource Not Found",
            ApiError::Internal(_) => "Internal Server Error",
        }
    }

    /// Builds the complete Problem Detail for this failure.
    pub fn problem(&self) -> ProblemDetail {
        let problem = ProblemDetail::new(self.problem_type(), self.title(), self.status())
            .with_detail(self.to_string());

        match self {
            ApiError::Validation { extensions, .. } | ApiError::Business { extensions, .. } => {
                problem.with_extensions(extensions.clone())
            }
            ApiError::NotFound {
                resource,
                identifier,
            } => problem
                .with_extension("resource", resource.as_str())
                .with_extension("identifier", identifier.clone()),
            ApiError::Database(database_error) => database_problem(problem, database_error),
            ApiError::Authentication(_) | ApiError::Authorization(_) | ApiError::Internal(_) => {
                problem
            }
        }
    }
}

fn database_problem(problem: ProblemDetail, error: &DatabaseError) -> ProblemDetail {
    let problem = match error.error_code() {
        Some(code) => problem.with_extension("errorCode", code),
        None => problem,
    };

    match error {
        DatabaseError::Generic(_) | DatabaseError::ConnectionFailed => problem,
        DatabaseError::QueryFailed { query, cause } => problem
            .with_extension("query", query.as_str())
            .with_extension("originalError", cause.as_str()),
        DatabaseError::TransactionFailed { operation, cause } => problem
            .with_extension("operation", operation.as_str())
            .with_extension("originalError", cause.as_str()),
        DatabaseError::ConstraintViolation { constraint, table } => problem
            .with_extension("constraint", constraint.as_str())
            .with_extension("table", table.as_str()),
        DatabaseError::Timeout {
            operation,
            timeout_ms,
        } => problem
            .with_extension("operation", operation.as_str())
            .with_extension("timeout", *timeout_ms),
    }
}

fn display_identifier(identifier: &Value) -> String {
    match identifier {
        Value::String(value) => value.clone(),
        other => other.to_string(),
    }
}

impl From<ValidationErrors> for ApiError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();
        for (field, field_errors) in errors.field_errors() {
            let messages: Vec<Value> = field_errors
                .iter()
                .map(|error| {
                    Value::String(
                        error
                            .message
                            .as_ref()
                            .map(|message| message.to_string())
                            .unwrap_or_else(|| error.code.to_string()),
                    )
                })
                .collect();
            fields.insert(field.to_string(), Value::Array(messages));
        }

        ApiError::validation(errors.to_string().trim().to_string())
            .with_extension("errors", Value::Object(fields.into_iter().collect()))
    }
}
