use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub use crate::shared::domain::model::value_objects::page::{PaginatedResponse, PaginationMeta};
use crate::shared::domain::model::value_objects::problem_detail::ProblemDetail;

/// Uniform success/failure envelope.
///
/// `success == true` never carries `problem`; `success == false` never carries `data`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<ProblemDetail>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            message: None,
            problem: None,
        }
    }

    pub fn success_with_message(data: T, message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
            ..Self::success(data)
        }
    }

    pub fn failure(problem: ProblemDetail) -> Self {
        Self {
            success: false,
            data: None,
            message: None,
            problem: Some(problem),
        }
    }
}

/// OpenAPI description of the error body. The wire type is
/// [`ProblemDetail`], which also carries category specific members.
#[derive(Clone, Debug, Serialize, Deserialize, ToSchema)]
pub struct ProblemDetailResource {
    #[serde(rename = "type")]
    #[schema(example = "https://example.com/problems/not-found-error")]
    pub problem_type: String,
    #[schema(example = "Resource Not Found")]
    pub title: String,
    #[schema(example = 404)]
    pub status: u16,
    pub detail: Option<String>,
    #[schema(example = "/api/users/42")]
    pub instance: Option<String>,
    #[schema(example = "2024-03-01T12:30:00.000Z")]
    pub timestamp: Option<String>,
    pub path: Option<String>,
    pub method: Option<String>,
}
