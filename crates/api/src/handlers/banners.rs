//! Handlers for the `/admin/banners` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::error::CoreError;
use finlit_core::media;
use finlit_core::types::DbId;
use finlit_core::visibility;
use finlit_db::models::banner::{Banner, CreateBanner, UpdateBanner};
use finlit_db::repositories::BannerRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A banner as served to clients.
#[derive(Debug, Serialize)]
pub struct BannerView {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub landing_url: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
}

impl BannerView {
    fn from_row(row: Banner, cdn_base: &str) -> Self {
        Self {
            id: row.id,
            title: row.title,
            subtitle: row.subtitle,
            image_url: media::public_url(cdn_base, row.image_path.as_deref()),
            landing_url: row.landing_url,
            visibility: row.visibility,
            created_by: row.created_by,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateBannerRequest {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub landing_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateBannerRequest {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_url: Option<String>,
    pub landing_url: Option<String>,
    pub visibility: Option<String>,
}

/// GET /admin/banners
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<BannerView>>>> {
    let rows = BannerRepo::list(&state.pool, params.visibility.as_deref()).await?;
    let data = rows
        .into_iter()
        .map(|row| BannerView::from_row(row, &state.config.cdn_base_url))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /admin/banners/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<BannerView>>> {
    let row = BannerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Banner",
            id,
        }))?;
    Ok(Json(DataResponse {
        data: BannerView::from_row(row, &state.config.cdn_base_url),
    }))
}

/// POST /admin/banners
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateBannerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<BannerView>>)> {
    let create = CreateBanner {
        title: input.title,
        subtitle: input.subtitle,
        image_path: media::path_from_url(&state.config.cdn_base_url, input.image_url.as_deref()),
        landing_url: input.landing_url,
        created_by: Some(user.name),
    };
    let created = BannerRepo::create(&state.pool, &create).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: BannerView::from_row(created, &state.config.cdn_base_url),
        }),
    ))
}

/// PUT /admin/banners/{id}
pub async fn update(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBannerRequest>,
) -> AppResult<Json<DataResponse<BannerView>>> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }

    let update = UpdateBanner {
        title: input.title,
        subtitle: input.subtitle,
        image_path: media::path_from_url(&state.config.cdn_base_url, input.image_url.as_deref()),
        landing_url: input.landing_url,
        visibility: input.visibility,
    };
    let updated = BannerRepo::update(&state.pool, id, &update).await?;
    Ok(Json(DataResponse {
        data: BannerView::from_row(updated, &state.config.cdn_base_url),
    }))
}

/// DELETE /admin/banners/{id}
pub async fn delete(
    State(state): State<AppState>,
    _user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    BannerRepo::delete(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
