use async_trait::async_trait;

use crate::{
    shared::domain::model::{enums::api_error::ApiError, value_objects::page::Page},
    users::domain::model::{
        entities::user::User,
        queries::{get_user_by_id_query::GetUserByIdQuery, list_users_query::ListUsersQuery},
    },
};

#[async_trait]
pub trait UserQueryService: Send + Sync {
    async fn handle_get(&self, query: GetUserByIdQuery) -> Result<User, ApiError>;

    async fn handle_list(&self, query: ListUsersQuery) -> Result<Page<User>, ApiError>;
}
