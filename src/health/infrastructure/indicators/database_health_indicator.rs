use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::{
    health::domain::{
        model::value_objects::health_check_result::HealthCheckResult,
        services::health_indicator::HealthIndicator,
    },
    shared::infrastructure::persistence::{data_store::DataStore, database_service::DatabaseService},
};

pub const DATABASE_INDICATOR_NAME: &str = "database";

/// Pings the store through the data-access facade.
pub struct DatabaseHealthIndicator<S: DataStore> {
    database: Arc<DatabaseService<S>>,
}

impl<S: DataStore> DatabaseHealthIndicator<S> {
    pub fn new(database: Arc<DatabaseService<S>>) -> Self {
        Self { database }
    }
}

#[async_trait]
impl<S: DataStore> HealthIndicator for DatabaseHealthIndicator<S> {
    fn name(&self) -> &str {
        DATABASE_INDICATOR_NAME
    }

    async fn check(&self) -> HealthCheckResult {
        let result = match self.database.ping().await {
            Ok(()) => HealthCheckResult::up(),
            Err(error) => HealthCheckResult::down(error.to_string()),
        };

        result.with_details(json!({ "connected": self.database.is_connected().await }))
    }
}
