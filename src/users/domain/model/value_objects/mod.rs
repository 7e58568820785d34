pub mod user_email;
pub mod user_id;
pub mod user_name;
