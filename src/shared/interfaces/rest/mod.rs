pub mod middleware;
pub mod openapi;
pub mod resources;
