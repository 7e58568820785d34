use async_trait::async_trait;

use crate::health::domain::model::value_objects::health_check_result::HealthCheckResult;

/// A named dependency check. Checks report `down` rather than failing.
#[async_trait]
pub trait HealthIndicator: Send + Sync {
    fn name(&self) -> &str;

    async fn check(&self) -> HealthCheckResult;
}
