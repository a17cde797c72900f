//! Route definitions for the banners resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::banners;
use crate::state::AppState;

/// Routes mounted at `/banners`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(banners::list).post(banners::create))
        .route(
            "/{id}",
            get(banners::get_by_id)
                .put(banners::update)
                .delete(banners::delete),
        )
}
