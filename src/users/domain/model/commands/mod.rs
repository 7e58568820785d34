pub mod create_user_command;
pub mod delete_user_command;
pub mod update_user_command;
