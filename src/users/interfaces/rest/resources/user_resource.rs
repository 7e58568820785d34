use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    shared::interfaces::rest::resources::api_response_resource::PaginationMeta,
    users::domain::model::entities::user::User,
};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResource {
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "Ada Lovelace")]
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResource {
    fn from(user: User) -> Self {
        Self {
            id: user.id().value(),
            email: user.email().value().to_string(),
            name: user.name().value().to_string(),
            created_at: user.created_at(),
            updated_at: user.updated_at(),
        }
    }
}

/// Documented shape of a single-user success body.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserEnvelopeResource {
    pub success: bool,
    pub data: UserResource,
}

/// Documented shape of a paginated user listing.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserPageEnvelopeResource {
    pub success: bool,
    pub data: Vec<UserResource>,
    pub pagination: PaginationMeta,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct UserDeletedEnvelopeResource {
    pub success: bool,
    #[schema(example = "User deleted successfully")]
    pub message: String,
}
