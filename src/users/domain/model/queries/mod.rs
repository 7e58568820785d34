pub mod get_user_by_id_query;
pub mod list_users_query;
