pub mod postgres;
pub mod user_repository;
