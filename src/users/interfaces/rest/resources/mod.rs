pub mod create_user_request_resource;
pub mod list_users_query_resource;
pub mod update_user_request_resource;
pub mod user_resource;
