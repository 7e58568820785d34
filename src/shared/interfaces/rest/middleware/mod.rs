use axum::{Router, middleware::from_fn};

pub mod exception_mapper_middleware;
pub mod response_envelope_middleware;

/// Wraps every successful JSON body in the success envelope.
pub fn with_response_envelope(router: Router) -> Router {
    router.layer(from_fn(
        response_envelope_middleware::normalize_response_envelope,
    ))
}

/// Turns every failure leaving `router`, its fallback included, into a Problem Detail.
pub fn with_exception_mapping(router: Router) -> Router {
    router.layer(from_fn(exception_mapper_middleware::map_exceptions))
}

/// Success envelopes inside, Problem Details at the outer edge.
pub fn with_api_pipeline(router: Router) -> Router {
    with_exception_mapping(with_response_envelope(router))
}
