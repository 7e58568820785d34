use crate::{
    shared::domain::model::enums::api_error::ApiError,
    users::domain::model::value_objects::{
        user_email::UserEmail, user_id::UserId, user_name::UserName,
    },
};

/// Partial update; at least one field must be present.
#[derive(Clone, Debug)]
pub struct UpdateUserCommand {
    user_id: UserId,
    email: Option<UserEmail>,
    name: Option<UserName>,
}

impl UpdateUserCommand {
    pub fn new(
        user_id: UserId,
        email: Option<String>,
        name: Option<String>,
    ) -> Result<Self, ApiError> {
        if email.is_none() && name.is_none() {
            return Err(ApiError::validation(
                "At least one of email or name must be provided",
            ));
        }

        Ok(Self {
            user_id,
            email: email.map(UserEmail::new).transpose()?,
            name: name.map(UserName::new).transpose()?,
        })
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn email(&self) -> Option<&UserEmail> {
        self.email.as_ref()
    }

    pub fn name(&self) -> Option<&UserName> {
        self.name.as_ref()
    }
}
