use axum::{
    body::{Body, to_bytes},
    extract::Request,
    http::{HeaderMap, StatusCode, header},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::shared::{
    application::response_normalizer::normalize, domain::model::enums::api_error::ApiError,
};

const MAX_ENVELOPE_BODY_BYTES: usize = 8 * 1024 * 1024;

/// Wraps successful JSON responses in the success envelope.
pub async fn normalize_response_envelope(request: Request, next: Next) -> Response {
    let response = next.run(request).await;

    if !response.status().is_success()
        || response.status() == StatusCode::NO_CONTENT
        || !is_json(response.headers())
    {
        return response;
    }

    let (mut parts, body) = response.into_parts();
    let bytes = match to_bytes(body, MAX_ENVELOPE_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(error) => {
            return ApiError::internal(format!("failed to buffer response body: {error}"))
                .into_response();
        }
    };

    let value = match serde_json::from_slice(&bytes) {
        Ok(value) => value,
        Err(_) => return Response::from_parts(parts, Body::from(bytes)),
    };

    match serde_json::to_vec(&normalize(value)) {
        Ok(enveloped) => {
            parts.headers.remove(header::CONTENT_LENGTH);
            Response::from_parts(parts, Body::from(enveloped))
        }
        Err(error) => ApiError::internal(format!("failed to serialize response envelope: {error}"))
            .into_response(),
    }
}

fn is_json(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(|value| {
            let mime = value.split(';').next().unwrap_or_default().trim();
            mime == "application/json"
        })
        .unwrap_or(false)
}
