use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::api_error::ApiError,
    users::domain::model::{
        entities::user::User,
        queries::list_users_query::ListUsersQuery,
        value_objects::{user_email::UserEmail, user_id::UserId, user_name::UserName},
    },
};

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn create(&self, email: &UserEmail, name: &UserName) -> Result<User, ApiError>;

    async fn find_by_id(&self, user_id: UserId) -> Result<Option<User>, ApiError>;

    async fn find_by_email(&self, email: &UserEmail) -> Result<Option<User>, ApiError>;

    /// Returns the requested window and the total row count.
    async fn list(&self, query: &ListUsersQuery) -> Result<(Vec<User>, u64), ApiError>;

    /// Fails with `NotFound` when no user has `user_id`.
    async fn update(
        &self,
        user_id: UserId,
        email: Option<&UserEmail>,
        name: Option<&UserName>,
    ) -> Result<User, ApiError>;

    /// Fails with `NotFound` when no user has `user_id`.
    async fn delete(&self, user_id: UserId) -> Result<(), ApiError>;
}
