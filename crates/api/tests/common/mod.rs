//! Shared helpers for the HTTP integration tests.
//!
//! Every test gets its own temporary data directory, so stores start from
//! the seed collections and nothing leaks between tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use chrono::{Duration, SecondsFormat, Utc};
use http_body_util::BodyExt;
use presentoir_api::config::ServerConfig;
use presentoir_api::router::build_app_router;
use presentoir_api::state::AppState;
use presentoir_events::EventBus;
use serde_json::{json, Value};
use tower::ServiceExt;

/// Build a test `ServerConfig` rooted at `data_dir`.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
    }
}

/// Open the stores under `data_dir` with a fresh event bus.
pub async fn build_test_state(data_dir: &Path) -> AppState {
    AppState::open(test_config(data_dir), Arc::new(EventBus::default()))
        .await
        .expect("stores should open over a temp dir")
}

/// Build the full application router, middleware included, the same way
/// `main.rs` does.
pub async fn build_test_app(data_dir: &Path) -> Router {
    let state = build_test_state(data_dir).await;
    let config = test_config(data_dir);
    build_app_router(state, &config)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, method: Method, uri: &str, body: Option<Value>) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn post_empty(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, None).await
}

pub async fn put_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// A reservation body that satisfies the default policy: starts two days
/// out and lasts `days` days.
pub fn reservation_body(name: &str, days: i64) -> Value {
    let start = Utc::now() + Duration::days(2);
    let end = start + Duration::days(days);
    json!({
        "name": name,
        "startDate": start.to_rfc3339_opts(SecondsFormat::Secs, true),
        "endDate": end.to_rfc3339_opts(SecondsFormat::Secs, true),
    })
}

/// Reserve stand `id` for Alice and return the reserved stand JSON.
pub async fn reserve(app: &Router, id: &str) -> Value {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/stands/{id}/reservation"),
        reservation_body("Alice", 7),
    )
    .await;
    assert_eq!(response.status(), 200, "reservation of stand {id} failed");
    body_json(response).await["data"].clone()
}

/// Submit a poster request on stand `id` and return the request JSON.
pub async fn request_poster(app: &Router, id: &str, poster: &str) -> Value {
    let response = post_json(
        app.clone(),
        &format!("/api/v1/stands/{id}/poster-requests"),
        json!({ "requestedPoster": poster }),
    )
    .await;
    assert_eq!(response.status(), 201, "poster request on stand {id} failed");
    body_json(response).await["data"].clone()
}
