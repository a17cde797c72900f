//! Handlers for the `/admin/columns` resource (editorial content columns).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::error::CoreError;
use finlit_core::media;
use finlit_core::types::DbId;
use finlit_core::visibility::{self, VISIBLE};
use finlit_db::models::column::{ContentColumn, CreateColumn, UpdateColumn};
use finlit_db::repositories::ColumnRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A column as served to clients, with its topic ids and the background
/// image joined onto the CDN base.
#[derive(Debug, Serialize)]
pub struct ColumnView {
    pub id: DbId,
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_url: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
    pub topic_ids: Vec<DbId>,
}

impl ColumnView {
    fn from_row(row: ContentColumn, topic_ids: Vec<DbId>, cdn_base: &str) -> Self {
        Self {
            id: row.id,
            title: row.title,
            summary: row.summary,
            content: row.content,
            background_url: media::public_url(cdn_base, row.background_path.as_deref()),
            visibility: row.visibility,
            created_by: row.created_by,
            topic_ids,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateColumnRequest {
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_url: Option<String>,
    pub visibility: Option<String>,
    #[serde(default)]
    pub topic_ids: Vec<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateColumnRequest {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_url: Option<String>,
    pub visibility: Option<String>,
    #[serde(default)]
    pub topic_ids: Vec<DbId>,
}

/// GET /admin/columns
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<ColumnView>>>> {
    let rows = ColumnRepo::list(&state.pool).await?;
    let mut data = Vec::with_capacity(rows.len());
    for row in rows {
        let topic_ids = ColumnRepo::topic_ids(&state.pool, row.id).await?;
        data.push(ColumnView::from_row(
            row,
            topic_ids,
            &state.config.cdn_base_url,
        ));
    }
    Ok(Json(DataResponse { data }))
}

/// GET /admin/columns/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ColumnView>>> {
    let row = ColumnRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ContentColumn",
            id,
        }))?;
    let topic_ids = ColumnRepo::topic_ids(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: ColumnView::from_row(row, topic_ids, &state.config.cdn_base_url),
    }))
}

/// POST /admin/columns
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateColumnRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<ColumnView>>)> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }

    let create = CreateColumn {
        title: input.title,
        summary: input.summary,
        content: input.content,
        background_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.background_url.as_deref(),
        ),
        visibility: input.visibility.unwrap_or_else(|| VISIBLE.to_string()),
        created_by: Some(user.name),
    };
    let created = ColumnRepo::create(&state.pool, &create, &input.topic_ids).await?;
    let topic_ids = ColumnRepo::topic_ids(&state.pool, created.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: ColumnView::from_row(created, topic_ids, &state.config.cdn_base_url),
        }),
    ))
}

/// PUT /admin/columns/{id}
///
/// Field edit plus topic-set reconciliation in one transaction.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateColumnRequest>,
) -> AppResult<Json<DataResponse<ColumnView>>> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }

    let update = UpdateColumn {
        title: input.title,
        summary: input.summary,
        content: input.content,
        background_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.background_url.as_deref(),
        ),
        visibility: input.visibility,
    };
    let updated = ColumnRepo::modify(&state.pool, id, &update, &input.topic_ids, Some(&user.name))
        .await?;
    let topic_ids = ColumnRepo::topic_ids(&state.pool, updated.id).await?;
    Ok(Json(DataResponse {
        data: ColumnView::from_row(updated, topic_ids, &state.config.cdn_base_url),
    }))
}
