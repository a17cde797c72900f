//! Handlers for the `/admin/categories` resource.
//!
//! Clients submit full image URLs; only the path component is stored, and
//! responses join the CDN base back on.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::error::CoreError;
use finlit_core::media;
use finlit_core::types::DbId;
use finlit_core::visibility;
use finlit_db::models::category::{Category, CreateCategory, TopicMove, UpdateCategory};
use finlit_db::repositories::CategoryRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A category as served to clients, with the thumbnail joined onto the
/// CDN base.
#[derive(Debug, Serialize)]
pub struct CategoryView {
    pub id: DbId,
    pub name: String,
    pub thumbnail_url: Option<String>,
    pub visibility: String,
    pub position: i64,
    pub created_by: Option<String>,
}

impl CategoryView {
    fn from_row(row: Category, cdn_base: &str) -> Self {
        Self {
            id: row.id,
            name: row.name,
            thumbnail_url: media::public_url(cdn_base, row.thumbnail_path.as_deref()),
            visibility: row.visibility,
            position: row.position,
            created_by: row.created_by,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateCategoryRequest {
    pub name: String,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateCategoryRequest {
    pub name: Option<String>,
    pub thumbnail_url: Option<String>,
    pub visibility: Option<String>,
    /// Topics to re-home to other categories as part of this edit.
    #[serde(default)]
    pub topic_moves: Vec<TopicMove>,
}

/// GET /admin/categories
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<CategoryView>>>> {
    let rows = CategoryRepo::list(&state.pool, params.visibility.as_deref()).await?;
    let data = rows
        .into_iter()
        .map(|row| CategoryView::from_row(row, &state.config.cdn_base_url))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /admin/categories/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<CategoryView>>> {
    let row = CategoryRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: CategoryView::from_row(row, &state.config.cdn_base_url),
    }))
}

/// POST /admin/categories
///
/// Appends the new category at the end of the manual order. The name must
/// be free; a taken name is reported as a conflict before the insert.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateCategoryRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<CategoryView>>)> {
    if CategoryRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Category '{}' already exists",
            input.name
        ))));
    }

    let create = CreateCategory {
        name: input.name,
        thumbnail_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.thumbnail_url.as_deref(),
        ),
        created_by: Some(user.name),
    };
    let created = CategoryRepo::create(&state.pool, &create).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: CategoryView::from_row(created, &state.config.cdn_base_url),
        }),
    ))
}

/// PUT /admin/categories/{id}
///
/// Edits the category's own fields and re-homes the listed topics in one
/// transaction; any bad move rolls the whole edit back.
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateCategoryRequest>,
) -> AppResult<Json<DataResponse<CategoryView>>> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }

    let update = UpdateCategory {
        name: input.name,
        thumbnail_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.thumbnail_url.as_deref(),
        ),
        visibility: input.visibility,
    };
    let updated = CategoryRepo::modify(&state.pool, id, &update, &input.topic_moves).await?;
    Ok(Json(DataResponse {
        data: CategoryView::from_row(updated, &state.config.cdn_base_url),
    }))
}
