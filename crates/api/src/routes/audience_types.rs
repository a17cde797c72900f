//! Route definitions for the audience types resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::audience_types;
use crate::state::AppState;

/// Routes mounted at `/audience-types`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(audience_types::list).post(audience_types::create),
        )
        .route(
            "/{id}",
            get(audience_types::get_by_id).put(audience_types::update),
        )
}
