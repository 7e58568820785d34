pub mod database_health_indicator;
