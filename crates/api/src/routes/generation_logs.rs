//! Route definitions for the generation audit log.

use axum::routing::get;
use axum::Router;

use crate::handlers::generation_logs;
use crate::state::AppState;

/// Routes mounted at `/generation-logs`.
///
/// ```text
/// GET    /    -> list (?topic_id, audience_type_id)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(generation_logs::list))
}
