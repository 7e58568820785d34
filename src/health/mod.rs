use std::sync::Arc;

use axum::Router;

use crate::{
    health::{
        application::query_services::health_check_service_impl::HealthCheckServiceImpl,
        domain::services::health_indicator::HealthIndicator,
        infrastructure::indicators::database_health_indicator::DatabaseHealthIndicator,
        interfaces::rest::controllers::health_rest_controller::{HealthRestControllerState, router},
    },
    shared::infrastructure::persistence::{data_store::DataStore, database_service::DatabaseService},
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_health_router<S>(database: Arc<DatabaseService<S>>) -> Router
where
    S: DataStore + 'static,
{
    let indicators: Vec<Arc<dyn HealthIndicator>> =
        vec![Arc::new(DatabaseHealthIndicator::new(database))];
    let health_check_service = Arc::new(HealthCheckServiceImpl::new(indicators));

    router(HealthRestControllerState {
        health_check_service,
    })
}
