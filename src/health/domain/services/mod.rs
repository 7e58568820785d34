pub mod health_check_service;
pub mod health_indicator;
