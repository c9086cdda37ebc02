//! Personalized insight route.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::{routing::post, Json, Router};
use chrono::{NaiveDate, NaiveTime};
use serde::Deserialize;
use starlore_core::{BirthDetails, InsightResponse, Language, Sign};
use starlore_llm::daily_insight;

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct InsightRequest {
    pub name: Option<String>,
    /// Birth date in `YYYY-MM-DD` format. Required.
    pub birth_date: Option<String>,
    /// Optional `HH:MM` time of birth. Accepted but currently unused
    /// by any computation.
    pub birth_time: Option<String>,
    pub birth_place: Option<String>,
    /// Language code (`en` / `hi`). Defaults to `en`.
    pub language: Option<String>,
}

/// POST /api/insight
///
/// Computes the sign from the birth details and resolves today's
/// insight through the cache/generator pipeline. 400 on missing or
/// invalid fields; generation itself never fails (LLM errors resolve
/// to the pre-written fallback).
pub async fn get_insight(
    State(state): State<AppState>,
    Json(body): Json<InsightRequest>,
) -> AppResult<impl IntoResponse> {
    let (name, birth_date_str) = match (body.name, body.birth_date) {
        (Some(name), Some(date)) => (name, date),
        _ => {
            return Err(AppError::BadRequest(
                "Missing required fields: name, birth_date".to_string(),
            ))
        }
    };

    let birth_date = NaiveDate::parse_from_str(&birth_date_str, "%Y-%m-%d").map_err(|_| {
        AppError::BadRequest("Invalid birth_date format. Use YYYY-MM-DD".to_string())
    })?;

    let birth_time = body
        .birth_time
        .as_deref()
        .and_then(|t| NaiveTime::parse_from_str(t, "%H:%M").ok());

    // Validates the name and rejects future dates (CoreError maps to 400).
    let details = BirthDetails::new(&name, birth_date, birth_time, body.birth_place)?;

    let language = Language::parse_or_default(body.language.as_deref().unwrap_or_default());
    let sign = Sign::from_date(details.birth_date);

    let insight = daily_insight(
        &state.cache,
        &state.generator,
        &details.name,
        sign,
        language,
    )
    .await;

    Ok(Json(InsightResponse::new(sign, insight, language)))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/insight", post(get_insight))
}
