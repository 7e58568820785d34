use std::sync::Arc;

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};

use crate::{
    health::{
        domain::{
            model::value_objects::health_check_response::HealthCheckResponse,
            services::health_check_service::HealthCheckService,
        },
        interfaces::rest::resources::health_envelope_resource::HealthEnvelopeResource,
    },
    shared::{
        application::exception_mapper::HttpFailure,
        domain::model::enums::api_error::ApiError,
        interfaces::rest::resources::api_response_resource::ProblemDetailResource,
    },
};

pub const HEALTH_CHECK_FAILED_MESSAGE: &str = "Service Unavailable";

#[derive(Clone)]
pub struct HealthRestControllerState {
    pub health_check_service: Arc<dyn HealthCheckService>,
}

pub fn router(state: HealthRestControllerState) -> Router {
    Router::new()
        .route("/health", get(check_health))
        .with_state(state)
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "health",
    responses(
        (status = 200, description = "Every dependency is up", body = HealthEnvelopeResource),
        (status = 503, description = "At least one dependency is down", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn check_health(State(state): State<HealthRestControllerState>) -> Response {
    let response = state.health_check_service.handle_check().await;
    if response.is_ok() {
        return Json(response).into_response();
    }

    match health_failure(&response) {
        Ok(failure) => failure.into_response(),
        Err(error) => error.into_response(),
    }
}

fn health_failure(response: &HealthCheckResponse) -> Result<HttpFailure, ApiError> {
    let details = serde_json::to_value(response)
        .map_err(|error| ApiError::internal(format!("health report serialization: {error}")))?;

    Ok(
        HttpFailure::new(StatusCode::SERVICE_UNAVAILABLE, HEALTH_CHECK_FAILED_MESSAGE)
            .with_extension("details", details),
    )
}
