use chrono::{DateTime, Utc};

use crate::users::domain::model::value_objects::{
    user_email::UserEmail, user_id::UserId, user_name::UserName,
};

#[derive(Clone, Debug, PartialEq)]
pub struct User {
    id: UserId,
    email: UserEmail,
    name: UserName,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl User {
    pub fn restore(
        id: UserId,
        email: UserEmail,
        name: UserName,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            email,
            name,
            created_at,
            updated_at,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn email(&self) -> &UserEmail {
        &self.email
    }

    pub fn name(&self) -> &UserName {
        &self.name
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }
}
