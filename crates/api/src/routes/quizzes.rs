//! Route definitions for the quizzes resource.
//!
//! The literal `/monthly` and `/daily` routes are registered before the
//! `/{id}` capture so they are matched as paths, not ids.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// Routes mounted at `/quizzes`.
///
/// ```text
/// POST   /           -> create
/// GET    /monthly    -> list_monthly (?year, month)
/// GET    /daily      -> get_daily (?date)
/// GET    /{id}       -> get_by_id
/// PUT    /{id}       -> update (fields + topic set)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(quizzes::create))
        .route("/monthly", get(quizzes::list_monthly))
        .route("/daily", get(quizzes::get_daily))
        .route("/{id}", get(quizzes::get_by_id).put(quizzes::update))
}
