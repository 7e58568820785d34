use crate::{
    shared::domain::model::enums::api_error::ApiError,
    users::domain::model::value_objects::{user_email::UserEmail, user_name::UserName},
};

#[derive(Clone, Debug)]
pub struct CreateUserCommand {
    email: UserEmail,
    name: UserName,
}

impl CreateUserCommand {
    pub fn new(email: String, name: String) -> Result<Self, ApiError> {
        Ok(Self {
            email: UserEmail::new(email)?,
            name: UserName::new(name)?,
        })
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }
}
