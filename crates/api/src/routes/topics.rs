//! Route definitions for the topics resource, including the per-topic
//! generation endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{generation, topics};
use crate::state::AppState;

/// Routes mounted at `/topics`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id (with answers)
/// PUT    /{id}                      -> update (fields + answer batch)
/// POST   /{id}/answer-generation    -> generate_answer
/// POST   /{id}/summary-generation   -> generate_summary
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(topics::list).post(topics::create))
        .route("/{id}", get(topics::get_by_id).put(topics::update))
        .route("/{id}/answer-generation", post(generation::generate_answer))
        .route(
            "/{id}/summary-generation",
            post(generation::generate_summary),
        )
}
