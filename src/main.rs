use std::sync::Arc;

use axum::Router;
use dotenvy::dotenv;
use problem_details_api::{
    config::{app_config::AppConfig, logging::init_tracing},
    health::{
        build_health_router,
        domain::model::value_objects::{
            health_check_response::{HealthCheckResponse, HealthStatus},
            health_check_result::{HealthCheckResult, IndicatorStatus},
        },
        interfaces::rest::resources::health_envelope_resource::HealthEnvelopeResource,
    },
    shared::{
        infrastructure::persistence::{
            database_service::DatabaseService, postgres::sqlx_data_store_impl::SqlxDataStoreImpl,
        },
        interfaces::rest::{
            middleware::{
                exception_mapper_middleware::route_not_found, with_exception_mapping,
                with_response_envelope,
            },
            openapi::security::BearerSecurityAddon,
            resources::api_response_resource::{PaginationMeta, ProblemDetailResource},
        },
    },
    users::{
        build_users_router,
        interfaces::rest::resources::{
            create_user_request_resource::CreateUserRequestResource,
            update_user_request_resource::UpdateUserRequestResource,
            user_resource::{
                UserDeletedEnvelopeResource, UserEnvelopeResource, UserPageEnvelopeResource,
                UserResource,
            },
        },
    },
};
use utoipa::{OpenApi, openapi::server::Server};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    paths(
        problem_details_api::users::interfaces::rest::controllers::users_rest_controller::create_user,
        problem_details_api::users::interfaces::rest::controllers::users_rest_controller::list_users,
        problem_details_api::users::interfaces::rest::controllers::users_rest_controller::get_user,
        problem_details_api::users::interfaces::rest::controllers::users_rest_controller::update_user,
        problem_details_api::users::interfaces::rest::controllers::users_rest_controller::delete_user,
        problem_details_api::health::interfaces::rest::controllers::health_rest_controller::check_health
    ),
    components(
        schemas(
            CreateUserRequestResource,
            UpdateUserRequestResource,
            UserResource,
            UserEnvelopeResource,
            UserPageEnvelopeResource,
            UserDeletedEnvelopeResource,
            PaginationMeta,
            ProblemDetailResource,
            HealthCheckResult,
            IndicatorStatus,
            HealthCheckResponse,
            HealthStatus,
            HealthEnvelopeResource
        )
    ),
    tags(
        (name = "users", description = "User management"),
        (name = "health", description = "Dependency health checks")
    ),
    modifiers(&BearerSecurityAddon)
)]
struct ApiDoc;

#[tokio::main]
async fn main() {
    dotenv().ok();

    let config = AppConfig::from_env();
    init_tracing(&config);

    let database = Arc::new(DatabaseService::new(SqlxDataStoreImpl::new(&config)));

    let api_router = with_response_envelope(
        Router::new()
            .merge(build_users_router(database.clone()))
            .merge(build_health_router(database.clone())),
    );

    let mut openapi = ApiDoc::openapi();
    if !config.api_prefix.is_empty() {
        openapi.servers = Some(vec![Server::new(config.api_prefix.clone())]);
    }
    let docs_path = format!("{}/docs", config.api_prefix);

    let mounted = if config.api_prefix.is_empty() {
        api_router
    } else {
        Router::new().nest(&config.api_prefix, api_router)
    };
    let app = with_exception_mapping(
        mounted
            .merge(SwaggerUi::new(docs_path.clone()).url(format!("{docs_path}/openapi.json"), openapi))
            .fallback(route_not_found),
    );

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!("Server listening on http://localhost:{}", config.port);
    tracing::info!(
        "Swagger UI available at http://localhost:{}{}",
        config.port,
        docs_path
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("failed to start axum server");

    database.close_connection().await;
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %error, "Failed to listen for shutdown signal");
    }
}
