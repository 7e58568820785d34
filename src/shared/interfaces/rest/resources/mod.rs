pub mod api_response_resource;
