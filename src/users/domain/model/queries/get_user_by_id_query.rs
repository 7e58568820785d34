use crate::users::domain::model::value_objects::user_id::UserId;

#[derive(Clone, Debug)]
pub struct GetUserByIdQuery {
    user_id: UserId,
}

impl GetUserByIdQuery {
    pub fn new(user_id: UserId) -> Self {
        Self { user_id }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }
}
