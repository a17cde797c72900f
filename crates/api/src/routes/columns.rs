//! Route definitions for the content columns resource, including the
//! column generation endpoints.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{columns, generation};
use crate::state::AppState;

/// Routes mounted at `/columns`.
///
/// ```text
/// GET    /                       -> list
/// POST   /                       -> create
/// POST   /content-generation     -> generate_column_content
/// POST   /summary-generation     -> generate_column_summary
/// GET    /{id}                   -> get_by_id
/// PUT    /{id}                   -> update (fields + topic set)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(columns::list).post(columns::create))
        .route(
            "/content-generation",
            post(generation::generate_column_content),
        )
        .route(
            "/summary-generation",
            post(generation::generate_column_summary),
        )
        .route("/{id}", get(columns::get_by_id).put(columns::update))
}
