//! Route definitions for the prompt template store.

use axum::routing::get;
use axum::Router;

use crate::handlers::prompts;
use crate::state::AppState;

/// Routes mounted at `/prompt-template`.
///
/// ```text
/// GET    /    -> get_current (latest version + placeholder legend)
/// POST   /    -> save (append a new version)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(prompts::get_current).post(prompts::save))
}
