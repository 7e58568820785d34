use axum::{
    body::Body,
    http::{Request, StatusCode, header},
};
use problem_details_api::shared::{
    application::exception_mapper::UNEXPECTED_ERROR_DETAIL,
    domain::model::enums::problem_type::ProblemType,
    interfaces::rest::middleware::exception_mapper_middleware::PROBLEM_JSON_CONTENT_TYPE,
};
use serde_json::json;

use crate::support::{
    fixtures::{PROBLEM_BASE, failure_for},
    pipeline_app, read_json, send,
};

fn get(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("valid request")
}

#[tokio::test]
async fn not_found_error_is_rendered_with_request_context() {
    let response = send(pipeline_app(), get("/users/42")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        PROBLEM_JSON_CONTENT_TYPE
    );

    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/not-found-error"));
    assert_eq!(body["title"], "Resource Not Found");
    assert_eq!(body["status"], 404);
    assert_eq!(body["detail"], "User with identifier '42' not found");
    assert_eq!(body["instance"], "/users/42");
    assert_eq!(body["path"], "/users/42");
    assert_eq!(body["method"], "GET");
    assert_eq!(body["resource"], "User");
    assert_eq!(body["identifier"], 42);

    let timestamp = body["timestamp"].as_str().expect("timestamp");
    assert!(timestamp.ends_with('Z'));
    assert!(chrono::DateTime::parse_from_rfc3339(timestamp).is_ok());
}

#[tokio::test]
async fn instance_keeps_the_query_string() {
    let response = send(pipeline_app(), get("/users/7?expand=true")).await;

    let body = read_json(response).await;
    assert_eq!(body["instance"], "/users/7?expand=true");
    assert_eq!(body["path"], "/users/7");
}

#[tokio::test]
async fn every_taxonomy_member_maps_to_its_type_and_status() {
    let cases = [
        ("validation", ProblemType::ValidationError, 400),
        ("business", ProblemType::BusinessError, 422),
        ("database", ProblemType::DatabaseError, 500),
        ("authentication", ProblemType::AuthenticationError, 401),
        ("authorization", ProblemType::AuthorizationError, 403),
        ("not-found", ProblemType::NotFoundError, 404),
        ("internal", ProblemType::InternalServerError, 500),
    ];

    for (kind, problem_type, status) in cases {
        let response = send(pipeline_app(), get(&format!("/fail/{kind}"))).await;

        assert_eq!(response.status().as_u16(), status, "{kind}");
        let body = read_json(response).await;
        assert_eq!(body["type"], problem_type.uri(), "{kind}");
        assert_eq!(body["status"], status, "{kind}");
        assert_eq!(body["detail"], failure_for(kind).to_string(), "{kind}");
    }
}

#[tokio::test]
async fn database_problems_carry_error_codes() {
    let response = send(pipeline_app(), get("/fail/database")).await;

    let body = read_json(response).await;
    assert_eq!(body["title"], "Database Error");
    assert_eq!(body["errorCode"], "DB_QUERY_FAILED");
    assert_eq!(body["query"], "find user");
    assert_eq!(body["detail"], "Database query 'find user' failed: timeout");
}

#[tokio::test]
async fn panics_become_generic_internal_errors() {
    let response = send(pipeline_app(), get("/panic")).await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/internal-server-error"));
    assert_eq!(body["title"], "Internal Server Error");
    assert_eq!(body["detail"], UNEXPECTED_ERROR_DETAIL);
    assert!(!body.to_string().contains("secret internal state"));
    assert_eq!(body["method"], "GET");
}

#[tokio::test]
async fn malformed_json_becomes_a_validation_problem() {
    let request = Request::builder()
        .method("POST")
        .uri("/echo")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from("{not json"))
        .expect("valid request");

    let response = send(pipeline_app(), request).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/validation-error"));
    assert_eq!(body["status"], 400);
    assert!(
        body["title"]
            .as_str()
            .expect("title")
            .starts_with("Failed to parse the request body as JSON")
    );
    assert_eq!(body["method"], "POST");
}

#[tokio::test]
async fn unmatched_routes_become_not_found_problems() {
    let response = send(pipeline_app(), get("/missing")).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/not-found-error"));
    assert_eq!(body["title"], "Cannot GET /missing");
    assert_eq!(body["detail"], "Cannot GET /missing");
}

#[tokio::test]
async fn rewritten_failures_keep_the_original_headers() {
    let response = send(pipeline_app(), get("/challenge")).await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let headers = response.headers();
    assert_eq!(headers[header::WWW_AUTHENTICATE], "Bearer realm=\"api\"");
    assert_eq!(headers[header::CACHE_CONTROL], "no-store");
    assert_eq!(headers.get_all(header::CONTENT_TYPE).iter().count(), 1);
    assert_eq!(headers[header::CONTENT_TYPE], PROBLEM_JSON_CONTENT_TYPE);

    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/authentication-error"));
    assert_eq!(body["status"], 401);
}

#[tokio::test]
async fn unsupported_methods_fall_back_to_http_failures() {
    let request = Request::builder()
        .method("DELETE")
        .uri("/page")
        .body(Body::empty())
        .expect("valid request");

    let response = send(pipeline_app(), request).await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    assert_eq!(response.headers()[header::ALLOW], "GET,HEAD");
    assert_eq!(
        response.headers()[header::CONTENT_TYPE],
        PROBLEM_JSON_CONTENT_TYPE
    );
    let body = read_json(response).await;
    assert_eq!(body["type"], format!("{PROBLEM_BASE}/internal-server-error"));
    assert_eq!(body["title"], "Method Not Allowed");
    assert_eq!(body["status"], 405);
}

#[tokio::test]
async fn mapping_is_deterministic_apart_from_timestamp() {
    let mut first = read_json(send(pipeline_app(), get("/fail/business")).await).await;
    let mut second = read_json(send(pipeline_app(), get("/fail/business")).await).await;

    for body in [&mut first, &mut second] {
        body.as_object_mut()
            .expect("problem object")
            .remove("timestamp");
    }

    assert_eq!(first, second);
    assert_eq!(
        first,
        json!({
            "type": format!("{PROBLEM_BASE}/business-error"),
            "title": "Business Logic Error",
            "status": 422,
            "detail": "User with email 'a@b.io' already exists",
            "instance": "/fail/business",
            "path": "/fail/business",
            "method": "GET",
        })
    );
}
