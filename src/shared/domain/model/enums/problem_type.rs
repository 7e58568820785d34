use axum::http::StatusCode;

const PROBLEM_TYPE_BASE_URI: &str = "https://example.com/problems";

/// Fixed set of problem categories exposed in the `type` member of a Problem Detail.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum ProblemType {
    ValidationError,
    BusinessError,
    DatabaseError,
    AuthenticationError,
    AuthorizationError,
    NotFoundError,
    InternalServerError,
}

impl ProblemType {
    pub const ALL: [ProblemType; 7] = [
        ProblemType::ValidationError,
        ProblemType::BusinessError,
        ProblemType::DatabaseError,
        ProblemType::AuthenticationError,
        ProblemType::AuthorizationError,
        ProblemType::NotFoundError,
        ProblemType::InternalServerError,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProblemType::ValidationError => "validation-error",
            ProblemType::BusinessError => "business-error",
            ProblemType::DatabaseError => "database-error",
            ProblemType::AuthenticationError => "authentication-error",
            ProblemType::AuthorizationError => "authorization-error",
            ProblemType::NotFoundError => "not-found-error",
            ProblemType::InternalServerError => "internal-server-error",
        }
    }

    pub fn uri(&self) -> String {
        format!("{PROBLEM_TYPE_BASE_URI}/{}", self.as_str())
    }

    /// Lookup used for framework-level failures that carry a status but no problem type.
    pub fn for_status(status: StatusCode) -> Self {
        match status {
            StatusCode::BAD_REQUEST => ProblemType::ValidationError,
            StatusCode::UNAUTHORIZED => ProblemType::AuthenticationError,
            StatusCode::FORBIDDEN => ProblemType::AuthorizationError,
            StatusCode::NOT_FOUND => ProblemType::NotFoundError,
            StatusCode::UNPROCESSABLE_ENTITY => ProblemType::BusinessError,
            _ => ProblemType::InternalServerError,
        }
    }
}
