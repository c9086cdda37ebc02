//! Route definitions.

use axum::Router;

use crate::state::AppState;

pub mod health;
pub mod insight;
pub mod zodiac;

/// All routes mounted under `/api`.
///
/// ```text
/// GET   /zodiac     zodiac sign lookup by birth date
/// POST  /insight    personalized daily insight
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(zodiac::router())
        .merge(insight::router())
}
