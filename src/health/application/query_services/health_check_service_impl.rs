use std::sync::Arc;

use async_trait::async_trait;
use futures_util::future::join_all;

use crate::health::domain::{
    model::value_objects::health_check_response::HealthCheckResponse,
    services::{health_check_service::HealthCheckService, health_indicator::HealthIndicator},
};

pub struct HealthCheckServiceImpl {
    indicators: Vec<Arc<dyn HealthIndicator>>,
}

impl HealthCheckServiceImpl {
    pub fn new(indicators: Vec<Arc<dyn HealthIndicator>>) -> Self {
        Self { indicators }
    }
}

#[async_trait]
impl HealthCheckService for HealthCheckServiceImpl {
    async fn handle_check(&self) -> HealthCheckResponse {
        let results = join_all(self.indicators.iter().map(|indicator| async move {
            let result = indicator.check().await;
            if !result.is_up() {
                tracing::warn!(
                    indicator = indicator.name(),
                    error = result.error.as_deref().unwrap_or_default(),
                    "Health indicator is down"
                );
            }
            (indicator.name().to_string(), result)
        }))
        .await;

        HealthCheckResponse::aggregate(results)
    }
}
