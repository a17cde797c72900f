//! Handlers for the `/admin/ordering` batch-reorder endpoints.
//!
//! The body is a `{id: position}` map applied all-or-nothing; sibling
//! rows not named in the map keep their positions.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;

use finlit_core::ordering::ReorderBatch;
use finlit_db::repositories::{CategoryRepo, TopicRepo};

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// PUT /admin/ordering/categories
pub async fn reorder_categories(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(batch): Json<ReorderBatch>,
) -> AppResult<StatusCode> {
    CategoryRepo::update_positions(&state.pool, &batch).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// PUT /admin/ordering/topics
pub async fn reorder_topics(
    State(state): State<AppState>,
    _user: AuthUser,
    Json(batch): Json<ReorderBatch>,
) -> AppResult<StatusCode> {
    TopicRepo::update_positions(&state.pool, &batch).await?;
    Ok(StatusCode::NO_CONTENT)
}
