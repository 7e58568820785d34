use std::{any::Any, panic::AssertUnwindSafe};

use axum::{
    Json,
    body::to_bytes,
    extract::Request,
    http::{HeaderMap, HeaderValue, Method, StatusCode, Uri, header},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use futures_util::FutureExt;

use crate::shared::{
    application::exception_mapper::{Failure, HttpFailure, resolve},
    domain::model::{
        enums::api_error::ApiError,
        value_objects::{problem_detail::ProblemDetail, request_context::RequestContext},
    },
};

pub const PROBLEM_JSON_CONTENT_TYPE: &str = "application/problem+json";
const MAX_ERROR_BODY_BYTES: usize = 64 * 1024;

/// Single exit point for failures: every non-2xx response and every panic
/// leaves through here as an enriched Problem Detail.
pub async fn map_exceptions(request: Request, next: Next) -> Response {
    let context = RequestContext::new(
        request.method().as_str(),
        request.uri().path(),
        request
            .uri()
            .path_and_query()
            .map(|path_and_query| path_and_query.as_str())
            .unwrap_or_else(|| request.uri().path()),
    );

    let response = match AssertUnwindSafe(next.run(request)).catch_unwind().await {
        Ok(response) => response,
        Err(panic) => return render(Failure::Unrecognized(panic_message(panic)), &context),
    };

    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let (parts, body) = response.into_parts();
    if let Some(failure) = parts.extensions.get::<Failure>() {
        return carry_headers(render(failure.clone(), &context), parts.headers);
    }

    let failure = match to_bytes(body, MAX_ERROR_BODY_BYTES).await {
        Ok(bytes) => Failure::Http(HttpFailure::from_response_body(status, &bytes)),
        Err(error) => Failure::Http(HttpFailure::new(status, "").with_extension(
            "bodyError",
            error.to_string(),
        )),
    };
    carry_headers(render(failure, &context), parts.headers)
}

/// Keeps headers such as `Allow` or `WWW-Authenticate` from the replaced
/// response. The body headers belong to the new problem body.
fn carry_headers(mut response: Response, original: HeaderMap) -> Response {
    for (name, value) in original.iter() {
        if name == header::CONTENT_TYPE || name == header::CONTENT_LENGTH {
            continue;
        }
        response.headers_mut().append(name.clone(), value.clone());
    }
    response
}

/// Fallback for requests no route matches.
pub async fn route_not_found(method: Method, uri: Uri) -> HttpFailure {
    HttpFailure::new(
        StatusCode::NOT_FOUND,
        format!("Cannot {method} {}", uri.path()),
    )
}

fn render(failure: Failure, context: &RequestContext) -> Response {
    let (status, mut problem) = resolve(&failure);
    problem.enrich(context, Utc::now());

    tracing::error!(
        method = context.method(),
        path = context.path(),
        status = status.as_u16(),
        cause = %failure.cause(),
        "Exception caught: {} - {}",
        problem.title(),
        problem.detail().unwrap_or_default()
    );

    problem_response(status, &problem, failure)
}

fn problem_response(
    status: StatusCode,
    problem: &ProblemDetail,
    failure: Failure,
) -> Response {
    let mut response = (status, Json(problem)).into_response();
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(PROBLEM_JSON_CONTENT_TYPE),
    );
    response.extensions_mut().insert(failure);
    response
}

fn panic_message(panic: Box<dyn Any + Send>) -> String {
    if let Some(message) = panic.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = panic.downcast_ref::<String>() {
        message.clone()
    } else {
        "handler panicked".to_string()
    }
}

/// Responses built from taxonomy members carry the failure in their extensions so
/// the middleware can re-render them with request context.
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let failure = Failure::Classified(self);
        let (status, problem) = resolve(&failure);
        problem_response(status, &problem, failure)
    }
}

impl IntoResponse for HttpFailure {
    fn into_response(self) -> Response {
        let failure = Failure::Http(self);
        let (status, problem) = resolve(&failure);
        problem_response(status, &problem, failure)
    }
}
