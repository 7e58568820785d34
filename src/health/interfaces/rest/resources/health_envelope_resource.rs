use serde::Serialize;
use utoipa::ToSchema;

use crate::health::domain::model::value_objects::health_check_response::HealthCheckResponse;

/// Documented shape of a healthy report.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthEnvelopeResource {
    pub success: bool,
    pub data: HealthCheckResponse,
}
