pub mod api_error;
pub mod database_error;
pub mod problem_type;
