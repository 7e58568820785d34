use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
    routing::get,
};
use serde_json::Value;
use validator::Validate;

use crate::{
    shared::{
        domain::model::{
            enums::api_error::ApiError,
            value_objects::{page::Page, pagination_params::PaginationParams},
        },
        interfaces::rest::resources::api_response_resource::{ApiResponse, ProblemDetailResource},
    },
    users::{
        domain::{
            model::{
                commands::{
                    create_user_command::CreateUserCommand, delete_user_command::DeleteUserCommand,
                    update_user_command::UpdateUserCommand,
                },
                queries::{get_user_by_id_query::GetUserByIdQuery, list_users_query::ListUsersQuery},
                value_objects::user_id::UserId,
            },
            services::{
                user_command_service::UserCommandService, user_query_service::UserQueryService,
            },
        },
        interfaces::rest::resources::{
            create_user_request_resource::CreateUserRequestResource,
            list_users_query_resource::ListUsersQueryResource,
            update_user_request_resource::UpdateUserRequestResource,
            user_resource::{
                UserDeletedEnvelopeResource, UserEnvelopeResource, UserPageEnvelopeResource,
                UserResource,
            },
        },
    },
};

pub const USER_DELETED_MESSAGE: &str = "User deleted successfully";

#[derive(Clone)]
pub struct UsersRestControllerState {
    pub command_service: Arc<dyn UserCommandService>,
    pub query_service: Arc<dyn UserQueryService>,
}

pub fn router(state: UsersRestControllerState) -> Router {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/:id",
            get(get_user).put(update_user).delete(delete_user),
        )
        .with_state(state)
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    request_body = CreateUserRequestResource,
    responses(
        (status = 201, description = "User created", body = UserEnvelopeResource),
        (status = 400, description = "Invalid request", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 422, description = "Email already registered", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 500, description = "Database failure", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn create_user(
    State(state): State<UsersRestControllerState>,
    payload: Result<Json<CreateUserRequestResource>, JsonRejection>,
) -> Result<(StatusCode, Json<UserResource>), ApiError> {
    let Json(request) = payload.map_err(map_json_rejection)?;
    request.validate()?;

    let command = CreateUserCommand::new(request.email, request.name)?;
    let user = state.command_service.handle_create(command).await?;

    Ok((StatusCode::CREATED, Json(UserResource::from(user))))
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    params(ListUsersQueryResource),
    responses(
        (status = 200, description = "Page of users", body = UserPageEnvelopeResource),
        (status = 400, description = "Invalid query", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 500, description = "Database failure", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn list_users(
    State(state): State<UsersRestControllerState>,
    params: Result<Query<ListUsersQueryResource>, QueryRejection>,
) -> Result<Json<Page<UserResource>>, ApiError> {
    let Query(params) =
        params.map_err(|rejection| ApiError::validation(rejection.body_text()))?;

    let pagination = PaginationParams::normalized(
        params.page,
        params.limit,
        params.sort_by,
        params.sort_order.as_deref(),
    );
    let query = ListUsersQuery::new(pagination)?;
    let page = state.query_service.handle_list(query).await?;

    Ok(Json(page.map(UserResource::from)))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserEnvelopeResource),
        (status = 400, description = "Invalid id", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn get_user(
    State(state): State<UsersRestControllerState>,
    Path(id): Path<String>,
) -> Result<Json<UserResource>, ApiError> {
    let query = GetUserByIdQuery::new(UserId::parse(&id)?);
    let user = state.query_service.handle_get(query).await?;

    Ok(Json(UserResource::from(user)))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    request_body = UpdateUserRequestResource,
    responses(
        (status = 200, description = "User updated", body = UserEnvelopeResource),
        (status = 400, description = "Invalid request", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 422, description = "Email already registered", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn update_user(
    State(state): State<UsersRestControllerState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdateUserRequestResource>, JsonRejection>,
) -> Result<Json<UserResource>, ApiError> {
    let user_id = UserId::parse(&id)?;
    let Json(request) = payload.map_err(map_json_rejection)?;
    request.validate()?;

    let command = UpdateUserCommand::new(user_id, request.email, request.name)?;
    let user = state.command_service.handle_update(command).await?;

    Ok(Json(UserResource::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "users",
    params(("id" = i32, Path, description = "User id")),
    responses(
        (status = 200, description = "User deleted", body = UserDeletedEnvelopeResource),
        (status = 400, description = "Invalid id", body = ProblemDetailResource, content_type = "application/problem+json"),
        (status = 404, description = "User not found", body = ProblemDetailResource, content_type = "application/problem+json")
    )
)]
pub async fn delete_user(
    State(state): State<UsersRestControllerState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Value>>, ApiError> {
    let command = DeleteUserCommand::new(UserId::parse(&id)?);
    state.command_service.handle_delete(command).await?;

    Ok(Json(ApiResponse::success_with_message(
        Value::Null,
        USER_DELETED_MESSAGE,
    )))
}

fn map_json_rejection(rejection: JsonRejection) -> ApiError {
    ApiError::validation(rejection.body_text())
}
