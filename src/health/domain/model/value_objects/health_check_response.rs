use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::health::domain::model::value_objects::health_check_result::HealthCheckResult;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Ok,
    Error,
}

/// Aggregate of every indicator, keyed by indicator name.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResponse {
    pub status: HealthStatus,
    pub info: BTreeMap<String, HealthCheckResult>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<BTreeMap<String, HealthCheckResult>>,
    pub details: BTreeMap<String, HealthCheckResult>,
}

impl HealthCheckResponse {
    /// `error` is only present when at least one indicator is down.
    pub fn aggregate(results: impl IntoIterator<Item = (String, HealthCheckResult)>) -> Self {
        let mut info = BTreeMap::new();
        let mut error = BTreeMap::new();
        let mut details = BTreeMap::new();

        for (name, result) in results {
            if result.is_up() {
                info.insert(name.clone(), result.clone());
            } else {
                error.insert(name.clone(), result.clone());
            }
            details.insert(name, result);
        }

        Self {
            status: if error.is_empty() {
                HealthStatus::Ok
            } else {
                HealthStatus::Error
            },
            info,
            error: Some(error).filter(|error| !error.is_empty()),
            details,
        }
    }

    pub fn is_ok(&self) -> bool {
        self.status == HealthStatus::Ok
    }
}
