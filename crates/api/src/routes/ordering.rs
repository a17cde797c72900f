//! Route definitions for the batch reorder endpoints.

use axum::routing::put;
use axum::Router;

use crate::handlers::ordering;
use crate::state::AppState;

/// Routes mounted at `/ordering`.
///
/// ```text
/// PUT    /categories    -> reorder_categories
/// PUT    /topics        -> reorder_topics
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/categories", put(ordering::reorder_categories))
        .route("/topics", put(ordering::reorder_topics))
}
