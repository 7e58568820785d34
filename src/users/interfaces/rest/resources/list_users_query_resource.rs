use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

#[derive(Debug, Clone, Default, Deserialize, Serialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersQueryResource {
    /// 1-based page number.
    pub page: Option<u64>,
    /// Page size, capped at 100.
    pub limit: Option<u64>,
    /// One of id, email, name, createdAt, updatedAt.
    pub sort_by: Option<String>,
    /// ASC or DESC.
    pub sort_order: Option<String>,
}
