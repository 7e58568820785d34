pub mod exception_mapper;
pub mod response_normalizer;
