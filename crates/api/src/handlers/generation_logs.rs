//! Handlers for the `/admin/generation-logs` resource (read-only audit).

use axum::extract::{Query, State};
use axum::Json;
use serde::Deserialize;

use finlit_core::types::DbId;
use finlit_db::models::generation_log::GenerationLog;
use finlit_db::repositories::GenerationLogRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub topic_id: Option<DbId>,
    pub audience_type_id: Option<DbId>,
}

/// GET /admin/generation-logs
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<GenerationLog>>>> {
    let data =
        GenerationLogRepo::list(&state.pool, params.topic_id, params.audience_type_id).await?;
    Ok(Json(DataResponse { data }))
}
