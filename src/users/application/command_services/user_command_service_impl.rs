use std::sync::Arc;

use async_trait::async_trait;

use crate::{
    shared::domain::model::enums::api_error::ApiError,
    users::{
        domain::{
            model::{
                commands::{
                    create_user_command::CreateUserCommand, delete_user_command::DeleteUserCommand,
                    update_user_command::UpdateUserCommand,
                },
                entities::user::User,
                value_objects::{user_email::UserEmail, user_id::UserId},
            },
            services::user_command_service::UserCommandService,
        },
        infrastructure::persistence::repositories::user_repository::UserRepository,
    },
};

pub struct UserCommandServiceImpl {
    user_repository: Arc<dyn UserRepository>,
}

impl UserCommandServiceImpl {
    pub fn new(user_repository: Arc<dyn UserRepository>) -> Self {
        Self { user_repository }
    }

    /// Rejects `email` when it belongs to a user other than `owner`.
    async fn ensure_email_available(
        &self,
        email: &UserEmail,
        owner: Option<UserId>,
    ) -> Result<(), ApiError> {
        match self.user_repository.find_by_email(email).await? {
            Some(existing) if Some(existing.id()) != owner => Err(ApiError::business(format!(
                "User with email '{}' already exists",
                email.value()
            ))
            .with_extension("email", email.value())),
            _ => Ok(()),
        }
    }
}

#[async_trait]
impl UserCommandService for UserCommandServiceImpl {
    async fn handle_create(&self, command: CreateUserCommand) -> Result<User, ApiError> {
        self.ensure_email_available(command.email(), None).await?;

        let user = self
            .user_repository
            .create(command.email(), command.name())
            .await?;
        tracing::info!(user_id = user.id().value(), "User created");

        Ok(user)
    }

    async fn handle_update(&self, command: UpdateUserCommand) -> Result<User, ApiError> {
        if let Some(email) = command.email() {
            self.ensure_email_available(email, Some(command.user_id()))
                .await?;
        }

        self.user_repository
            .update(command.user_id(), command.email(), command.name())
            .await
    }

    async fn handle_delete(&self, command: DeleteUserCommand) -> Result<(), ApiError> {
        self.user_repository.delete(command.user_id()).await?;
        tracing::info!(user_id = command.user_id().value(), "User deleted");

        Ok(())
    }
}
