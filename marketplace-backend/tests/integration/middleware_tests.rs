// tests/integration/middleware_tests.rs

use axum::http::{header, Method, Request, StatusCode};
use axum::body::Body;

use crate::common::{app_helper::setup_app, request::send};

#[tokio::test]
async fn test_request_id_is_echoed() {
    let app = setup_app().await;

    let request = Request::builder()
        .uri("/health")
        .header("x-request-id", "req-12345")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["x-request-id"], "req-12345");
}

#[tokio::test]
async fn test_request_id_is_generated_when_absent() {
    let app = setup_app().await;

    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;

    let request_id = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(request_id).is_ok());
}

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let app = setup_app().await;

    let preflight = Request::builder()
        .method(Method::OPTIONS)
        .uri("/book_service")
        .header(header::ORIGIN, "http://frontend.example")
        .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
        .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, preflight).await;

    assert!(response.status().is_success());
    assert_eq!(
        response.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
        "http://frontend.example"
    );
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = setup_app().await;

    let request = Request::builder()
        .uri("/does-not-exist")
        .body(Body::empty())
        .unwrap();
    let response = send(&app.router, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
