//! Zodiac sign lookup route.

use axum::extract::Query;
use axum::response::IntoResponse;
use axum::{routing::get, Json, Router};
use chrono::{Local, NaiveDate};
use serde::{Deserialize, Serialize};
use starlore_core::schemas::validate_birth_date;
use starlore_core::{Language, Sign, ZodiacInfo};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ZodiacQuery {
    /// Birth date in `YYYY-MM-DD` format. Required.
    pub date: Option<String>,
    /// Language code (`en` / `hi`). Defaults to `en`.
    pub language: Option<String>,
}

/// Zodiac info plus the language it was rendered in.
#[derive(Debug, Serialize)]
pub struct ZodiacResponse {
    #[serde(flatten)]
    pub info: ZodiacInfo,
    pub language: Language,
}

/// GET /api/zodiac?date=YYYY-MM-DD&language=en|hi
///
/// Computes the sign for the given birth date and returns its static
/// traits with a localized display name. 400 on a missing, malformed,
/// or future date.
pub async fn get_zodiac(Query(params): Query<ZodiacQuery>) -> AppResult<impl IntoResponse> {
    let date_str = params
        .date
        .ok_or_else(|| AppError::BadRequest("Missing 'date' parameter".to_string()))?;

    let birth_date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest("Invalid date format. Use YYYY-MM-DD".to_string()))?;

    validate_birth_date(birth_date, Local::now().date_naive())?;

    let language = Language::parse_or_default(params.language.as_deref().unwrap_or_default());
    let sign = Sign::from_date(birth_date);

    Ok(Json(ZodiacResponse {
        info: ZodiacInfo::for_sign(sign, language),
        language,
    }))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/zodiac", get(get_zodiac))
}
