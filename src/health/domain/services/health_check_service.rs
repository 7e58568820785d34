use async_trait::async_trait;

use crate::health::domain::model::value_objects::health_check_response::HealthCheckResponse;

#[async_trait]
pub trait HealthCheckService: Send + Sync {
    async fn handle_check(&self) -> HealthCheckResponse;
}
