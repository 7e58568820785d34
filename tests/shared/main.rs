
mod database_service_tests;
mod exception_mapper_pipeline_tests;
