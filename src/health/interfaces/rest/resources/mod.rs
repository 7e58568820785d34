pub mod health_envelope_resource;
