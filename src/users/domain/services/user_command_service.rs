use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::api_error::ApiError,
    users::domain::model::{
        commands::{
            create_user_command::CreateUserCommand, delete_user_command::DeleteUserCommand,
            update_user_command::UpdateUserCommand,
        },
        entities::user::User,
    },
};

#[async_trait]
pub trait UserCommandService: Send + Sync {
    async fn handle_create(&self, command: CreateUserCommand) -> Result<User, ApiError>;

    async fn handle_update(&self, command: UpdateUserCommand) -> Result<User, ApiError>;

    async fn handle_delete(&self, command: DeleteUserCommand) -> Result<(), ApiError>;
}
