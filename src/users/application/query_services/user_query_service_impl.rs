use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    shared::domain::model::{enums::api_error::ApiError, value_objects::page::Page},
    users::{
        domain::{
            model::{
                entities::user::User,
                queries::{get_user_by_id_query::GetUserByIdQuery, list_users_query::ListUsersQuery},
            },
            services::user_query_service::UserQueryService,
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

pub struct UserQueryServiceImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserQueryServiceImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }
}

#[async_trait]
impl UserQueryService for UserQueryServiceImpl {
    async fn handle_get(&self, query: GetUserByIdQuery) -> Result<User, ApiError> {
        let user_id = query.user_id();

        self.user_repository
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ApiError::not_found("User", user_id.value()))
    }

    async fn handle_list(&self, query: ListUsersQuery) -> Result<Page<User>, ApiError> {
        let (users, total) = self.user_repository.list(&query).await?;

        Ok(Page::new(users, total, query.pagination()))
    }
}
