pub mod page;
pub mod pagination_params;
pub mod problem_detail;
pub mod request_context;
