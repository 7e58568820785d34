use std::sync::Arc;

use axum::Router;

use crate::{
    shared::infrastructure::persistence::{
        database_service::DatabaseService, postgres::sqlx_data_store_impl::SqlxDataStoreImpl,
    },
    users::{
        application::{
            command_services::user_command_service_impl::UserCommandServiceImpl,
            query_services::user_query_service_impl::UserQueryServiceImpl,
        },
        infrastructure::persistence::repositories::postgres::sqlx_user_repository_impl::SqlxUserRepositoryImpl,
        interfaces::rest::controllers::users_rest_controller::{UsersRestControllerState, router},
    },
};

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;

pub fn build_users_router(database: Arc<DatabaseService<SqlxDataStoreImpl>>) -> Router {
    let user_repository = Arc::new(SqlxUserRepositoryImpl::new(database));

    let command_service = Arc::new(UserCommandServiceImpl::new(user_repository.clone()));
    let query_service = Arc::new(UserQueryServiceImpl::new(user_repository));

    router(UsersRestControllerState {
        command_service,
        query_service,
    })
}
