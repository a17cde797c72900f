//! Handlers for the `/admin/prompt-template` resource.
//!
//! The template store is append-only: saving creates a new version and
//! reads always return the latest one, together with the placeholder
//! legend the admin UI renders next to the editor.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::template::STANDARD_PLACEHOLDERS;
use finlit_db::models::prompt::PromptTemplate;
use finlit_db::repositories::PromptRepo;

use crate::error::AppResult;
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// One row of the placeholder legend.
#[derive(Debug, Serialize)]
pub struct PlaceholderInfo {
    /// Domain field the placeholder stands for.
    pub field: &'static str,
    /// The literal token to put in the template.
    pub token: &'static str,
}

/// The current template (if any) plus the placeholder legend.
#[derive(Debug, Serialize)]
pub struct PromptTemplateView {
    pub current: Option<PromptTemplate>,
    pub placeholders: Vec<PlaceholderInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SaveTemplateRequest {
    pub template: String,
}

/// GET /admin/prompt-template
pub async fn get_current(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<PromptTemplateView>>> {
    let current = PromptRepo::latest(&state.pool).await?;
    let placeholders = STANDARD_PLACEHOLDERS
        .iter()
        .map(|&(field, token)| PlaceholderInfo { field, token })
        .collect();
    Ok(Json(DataResponse {
        data: PromptTemplateView {
            current,
            placeholders,
        },
    }))
}

/// POST /admin/prompt-template
///
/// Appends a new template version; earlier versions stay as history.
pub async fn save(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SaveTemplateRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<PromptTemplate>>)> {
    let data = PromptRepo::append(&state.pool, &input.template, Some(&user.name)).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}
