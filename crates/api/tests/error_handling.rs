//! Error envelope and rejection behaviour shared by every endpoint.

mod common;

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get, post_empty, send};
use serde_json::json;
use tower::ServiceExt;

#[tokio::test]
async fn not_found_uses_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let json = body_json(get(app, "/api/v1/stands/ghost").await).await;

    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "DisplayStand with id ghost not found");
    assert!(json.get("data").is_none());
}

#[tokio::test]
async fn conflict_uses_error_envelope() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = send(
        app,
        Method::POST,
        "/api/v1/stands/1/poster-requests",
        Some(json!({ "requestedPoster": "Soldes" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
    assert!(json["error"].is_string());
}

#[tokio::test]
async fn malformed_json_is_rejected_before_any_mutation() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/stands/1/reservation")
        .header("content-type", "application/json")
        .body(Body::from("{ not json"))
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert!(json["error"].is_string());

    let stand = body_json(get(app, "/api/v1/stands/1").await).await;
    assert_eq!(stand["data"]["isReserved"], false);
}

#[tokio::test]
async fn body_without_json_content_type_is_bad_request() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let request = Request::builder()
        .method(Method::PUT)
        .uri("/api/v1/settings")
        .body(Body::from("{}"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn missing_body_field_is_a_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = send(
        app,
        Method::POST,
        "/api/v1/stands/1/reservation",
        Some(json!({ "name": "Alice" })),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(json["error"].as_str().unwrap().contains("startDate"));
}

#[tokio::test]
async fn wrong_method_is_405() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let response = post_empty(app, "/api/v1/stats").await;

    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}

#[tokio::test]
async fn cors_preflight_allows_dev_origin() {
    let dir = tempfile::tempdir().unwrap();
    let app = build_test_app(dir.path()).await;

    let request = Request::builder()
        .method(Method::OPTIONS)
        .uri("/api/v1/stands/1/reservation")
        .header("origin", "http://localhost:5173")
        .header("access-control-request-method", "DELETE")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(
        response.headers().get("access-control-allow-origin").unwrap(),
        "http://localhost:5173"
    );
}
