pub mod config;
pub mod health;
pub mod shared;
pub mod users;
