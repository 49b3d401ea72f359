//! Shared helpers for API integration tests.
//!
//! Mirrors the production router construction so tests exercise the same
//! middleware stack (CORS, request ID, timeout, tracing, panic recovery).

// Each test binary compiles this module separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use tfa_api::config::ServerConfig;
use tfa_api::router::build_app_router;
use tfa_api::state::AppState;

/// Shared secret used by every gated request in tests.
pub const TEST_API_KEY: &str = "test-key";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        api_key: TEST_API_KEY.to_string(),
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Issue a request carrying the shared API key, with an optional JSON body.
pub async fn request(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-key", TEST_API_KEY);

    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };

    let request = builder.body(body).expect("request must build");
    app.oneshot(request).await.expect("request must not fail")
}

/// GET with the shared API key.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::GET, uri, None).await
}

/// GET without any API key, for exercising the gate.
pub async fn get_no_key(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .expect("request must build");
    app.oneshot(request).await.expect("request must not fail")
}

/// POST a JSON body with the shared API key.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::POST, uri, Some(body)).await
}

/// PUT a JSON body with the shared API key.
pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    request(app, Method::PUT, uri, Some(body)).await
}

/// DELETE with the shared API key.
pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    request(app, Method::DELETE, uri, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body must collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body must be valid JSON")
}
