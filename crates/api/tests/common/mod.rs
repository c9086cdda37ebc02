#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use starlore_api::config::ServerConfig;
use starlore_api::router::build_app_router;
use starlore_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults: no LLM credential
/// (insights take the deterministic fallback path) and caching enabled.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        openai_api_key: None,
        openai_base_url: None,
        enable_caching: true,
        app_env: "development".to_string(),
    }
}

/// Build the full application router with all middleware layers.
///
/// This mirrors the router construction in `main.rs` so integration
/// tests exercise the same middleware stack (CORS, request ID, timeout,
/// tracing, panic recovery) that production uses. Each call builds a
/// fresh cache and generator, so tests are isolated.
pub fn build_test_app() -> Router {
    let config = test_config();
    let state = AppState::from_config(config.clone());
    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    app.oneshot(
        Request::builder()
            .method("POST")
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert a response is a 400 whose error message contains `fragment`.
pub async fn assert_bad_request(response: Response, fragment: &str) {
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    let message = json["error"].as_str().unwrap();
    assert!(
        message.contains(fragment),
        "expected error containing '{fragment}', got: {message}"
    );
}
