pub mod data_store;
pub mod database_service;
pub mod postgres;
