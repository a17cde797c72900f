//! Handlers for the `/admin/audience-types` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use finlit_core::error::CoreError;
use finlit_core::types::DbId;
use finlit_core::visibility;
use finlit_db::models::audience_type::{AudienceType, CreateAudienceType, UpdateAudienceType};
use finlit_db::repositories::AudienceTypeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateAudienceTypeRequest {
    pub name: String,
    pub profile: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateAudienceTypeRequest {
    pub name: Option<String>,
    pub profile: Option<String>,
    pub visibility: Option<String>,
}

/// GET /admin/audience-types
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<AudienceType>>>> {
    let data = AudienceTypeRepo::list(&state.pool, params.visibility.as_deref()).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /admin/audience-types/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<AudienceType>>> {
    let data = AudienceTypeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudienceType",
            id,
        }))?;
    Ok(Json(DataResponse { data }))
}

/// POST /admin/audience-types
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateAudienceTypeRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<AudienceType>>)> {
    if AudienceTypeRepo::find_by_name(&state.pool, &input.name)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Audience type '{}' already exists",
            input.name
        ))));
    }

    let create = CreateAudienceType {
        name: input.name,
        profile: input.profile,
        created_by: Some(user.name),
    };
    let data = AudienceTypeRepo::create(&state.pool, &create).await?;
    Ok((StatusCode::CREATED, Json(DataResponse { data })))
}

/// PUT /admin/audience-types/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateAudienceTypeRequest>,
) -> AppResult<Json<DataResponse<AudienceType>>> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }

    let update = UpdateAudienceType {
        name: input.name,
        profile: input.profile,
        visibility: input.visibility,
    };
    let data = AudienceTypeRepo::update(&state.pool, id, &update).await?;
    Ok(Json(DataResponse { data }))
}
