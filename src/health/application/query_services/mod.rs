pub mod health_check_service_impl;
