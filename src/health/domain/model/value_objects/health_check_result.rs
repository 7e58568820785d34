use serde::{Deserialize, Serialize};
use serde_json::Value;
use utoipa::ToSchema;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum IndicatorStatus {
    Up,
    Down,
}

/// Outcome of a single dependency check.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct HealthCheckResult {
    pub status: IndicatorStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
}

impl HealthCheckResult {
    pub fn up() -> Self {
        Self {
            status: IndicatorStatus::Up,
            error: None,
            details: None,
        }
    }

    pub fn down(error: impl Into<String>) -> Self {
        Self {
            status: IndicatorStatus::Down,
            error: Some(error.into()),
            details: None,
        }
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = Some(details);
        self
    }

    pub fn is_up(&self) -> bool {
        self.status == IndicatorStatus::Up
    }
}
