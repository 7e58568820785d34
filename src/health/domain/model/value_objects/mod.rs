pub mod health_check_response;
pub mod health_check_result;
