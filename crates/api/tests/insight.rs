//! Integration tests for POST /api/insight.
//!
//! The test app has no LLM credential, so every insight comes from the
//! deterministic fallback rotation — which makes end-to-end responses
//! assertable.

mod common;

use axum::http::StatusCode;
use chrono::Local;
use common::{assert_bad_request, body_json, post_json};
use serde_json::json;
use starlore_core::Sign;
use starlore_llm::insight::fallback_insight;

// ---------------------------------------------------------------------------
// Test: end-to-end fallback insight for a known date
// ---------------------------------------------------------------------------

#[tokio::test]
async fn known_date_returns_cancer_fallback_insight() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({ "name": "Asha", "birth_date": "2024-07-10" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["zodiac"], "Cancer");
    assert_eq!(json["language"], "en");
    assert_eq!(json["element"], "Water");
    assert_eq!(json["ruling_planet"], "Moon");
    assert_eq!(json["traits"].as_array().unwrap().len(), 5);

    // With no credential the insight is today's fallback line.
    let expected = fallback_insight(Sign::Cancer, Local::now().date_naive());
    assert_eq!(json["insight"], expected);
}

// ---------------------------------------------------------------------------
// Test: repeated same-day requests hit the cache and agree
// ---------------------------------------------------------------------------

#[tokio::test]
async fn repeated_requests_return_identical_insight() {
    // One state shared across both requests, mirroring a live server.
    let config = common::test_config();
    let state = starlore_api::state::AppState::from_config(config.clone());

    let body = json!({ "name": "Asha", "birth_date": "2024-07-10" });

    let app = starlore_api::router::build_app_router(state.clone(), &config);
    let first = body_json(post_json(app, "/api/insight", body.clone()).await).await;

    let app = starlore_api::router::build_app_router(state, &config);
    let second = body_json(post_json(app, "/api/insight", body).await).await;

    assert_eq!(first["insight"], second["insight"]);
}

// ---------------------------------------------------------------------------
// Test: Hindi response localizes the sign name
// ---------------------------------------------------------------------------

#[tokio::test]
async fn hindi_language_localizes_zodiac_name() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({ "name": "Asha", "birth_date": "2024-07-10", "language": "hi" }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["zodiac"], "कर्क");
    assert_eq!(json["language"], "hi");
}

// ---------------------------------------------------------------------------
// Test: optional birth fields are accepted without changing behaviour
// ---------------------------------------------------------------------------

#[tokio::test]
async fn optional_birth_fields_are_accepted() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({
            "name": "Asha",
            "birth_date": "2024-07-10",
            "birth_time": "04:30",
            "birth_place": "Pune",
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["zodiac"], "Cancer");
}

// ---------------------------------------------------------------------------
// Test: validation failures return 400
// ---------------------------------------------------------------------------

#[tokio::test]
async fn missing_fields_return_400() {
    let app = common::build_test_app();
    let response = post_json(app, "/api/insight", json!({ "name": "Asha" })).await;
    assert_bad_request(response, "Missing required fields").await;
}

#[tokio::test]
async fn malformed_birth_date_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({ "name": "Asha", "birth_date": "July 10, 2024" }),
    )
    .await;
    assert_bad_request(response, "Invalid birth_date format").await;
}

#[tokio::test]
async fn future_birth_date_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({ "name": "Asha", "birth_date": "2999-01-01" }),
    )
    .await;
    assert_bad_request(response, "future").await;
}

#[tokio::test]
async fn blank_name_returns_400() {
    let app = common::build_test_app();
    let response = post_json(
        app,
        "/api/insight",
        json!({ "name": "   ", "birth_date": "2024-07-10" }),
    )
    .await;
    assert_bad_request(response, "Name cannot be empty").await;
}
