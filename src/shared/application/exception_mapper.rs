//! Conversion of any failure surfacing from request handling into a Problem Detail.

use axum::http::StatusCode;
use serde_json::{Map, Value};

use crate::shared::domain::model::{
    enums::{api_error::ApiError, problem_type::ProblemType},
    value_objects::problem_detail::ProblemDetail,
};

pub const UNEXPECTED_ERROR_DETAIL: &str = "An unexpected error occurred";
const HTTP_FAILURE_TITLE: &str = "HTTP Exception";

/// Framework-level failure: a status and a message, but no Problem Detail of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpFailure {
    status: StatusCode,
    message: Option<String>,
    payload: Option<Value>,
    extensions: Map<String, Value>,
}

impl HttpFailure {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: Some(message.into()).filter(|message| !message.trim().is_empty()),
            payload: None,
            extensions: Map::new(),
        }
    }

    /// Classifies a bare error response produced outside the taxonomy (extractor
    /// rejections, unmatched routes). JSON bodies are kept as the structured payload.
    pub fn from_response_body(status: StatusCode, body: &[u8]) -> Self {
        let payload = serde_json::from_slice::<Value>(body).ok();
        let message = match &payload {
            Some(Value::String(text)) => Some(text.clone()),
            Some(_) => None,
            None => Some(String::from_utf8_lossy(body).trim().to_string()),
        }
        .filter(|message| !message.is_empty())
        .or_else(|| status.canonical_reason().map(str::to_string));

        Self {
            status,
            message,
            payload: payload.filter(Value::is_object),
            extensions: Map::new(),
        }
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    pub fn with_extension(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extensions.insert(key.into(), value.into());
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    fn payload_message(&self) -> Option<&str> {
        self.payload
            .as_ref()
            .and_then(|payload| payload.get("message"))
            .and_then(Value::as_str)
    }
}

/// Every shape of failure the mapper can receive.
#[derive(Clone, Debug, PartialEq)]
pub enum Failure {
    Classified(ApiError),
    Http(HttpFailure),
    /// Panics and any other failure outside the taxonomy. The message is logged, never sent.
    Unrecognized(String),
}

impl Failure {
    /// Server-side description used for logging.
    pub fn cause(&self) -> String {
        match self {
            Failure::Classified(error) => format!("{error:?}"),
            Failure::Http(failure) => format!("{failure:?}"),
            Failure::Unrecognized(message) => message.clone(),
        }
    }
}

/// Resolves the status and Problem Detail for a failure. Request context is
/// attached separately by the middleware.
pub fn resolve(failure: &Failure) -> (StatusCode, ProblemDetail) {
    match failure {
        Failure::Classified(error) => (error.status(), error.problem()),
        Failure::Http(http_failure) => {
            let status = http_failure.status;
            let title = http_failure
                .message()
                .unwrap_or(HTTP_FAILURE_TITLE)
                .to_string();
            let detail = http_failure
                .payload_message()
                .map(str::to_string)
                .unwrap_or_else(|| title.clone());

            let problem = ProblemDetail::new(ProblemType::for_status(status), title, status)
                .with_detail(detail)
                .with_extensions(http_failure.extensions.clone());
            (status, problem)
        }
        Failure::Unrecognized(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            ProblemDetail::new(
                ProblemType::InternalServerError,
                "Internal Server Error",
                StatusCode::INTERNAL_SERVER_ERROR,
            )
            .with_detail(UNEXPECTED_ERROR_DETAIL),
        ),
    }
}
