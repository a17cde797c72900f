//! Handlers for the `/admin/topics` resource.
//!
//! A topic edit may carry a batch of per-audience answer entries; the
//! batch is validated and converted into tagged changes at this boundary
//! and applied inside the same transaction as the field update.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::answers::{self, AnswerEntry, MissingTargetPolicy};
use finlit_core::error::CoreError;
use finlit_core::media;
use finlit_core::types::DbId;
use finlit_core::visibility;
use finlit_db::models::answer::Answer;
use finlit_db::models::topic::{CreateTopic, Topic, UpdateTopic};
use finlit_db::repositories::{AnswerRepo, TopicRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A topic as served to clients.
#[derive(Debug, Serialize)]
pub struct TopicView {
    pub id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
    pub visibility: String,
    pub position: i64,
    pub created_by: Option<String>,
}

impl TopicView {
    fn from_row(row: Topic, cdn_base: &str) -> Self {
        Self {
            id: row.id,
            category_id: row.category_id,
            title: row.title,
            definition: row.definition,
            summary: row.summary,
            thumbnail_url: media::public_url(cdn_base, row.thumbnail_path.as_deref()),
            visibility: row.visibility,
            position: row.position,
            created_by: row.created_by,
        }
    }
}

/// Topic detail: the topic plus its answers sorted by audience type id.
#[derive(Debug, Serialize)]
pub struct TopicDetail {
    #[serde(flatten)]
    pub topic: TopicView,
    pub answers: Vec<Answer>,
}

#[derive(Debug, Deserialize)]
pub struct ListParams {
    pub category_id: Option<DbId>,
    pub visibility: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub category_id: DbId,
    pub title: String,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_url: Option<String>,
    pub visibility: Option<String>,
    /// Per-audience answer entries applied alongside the field edit.
    #[serde(default)]
    pub answers: Vec<AnswerEntry>,
}

/// GET /admin/topics
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> AppResult<Json<DataResponse<Vec<TopicView>>>> {
    let rows = TopicRepo::list(&state.pool, params.category_id, params.visibility.as_deref())
        .await?;
    let data = rows
        .into_iter()
        .map(|row| TopicView::from_row(row, &state.config.cdn_base_url))
        .collect();
    Ok(Json(DataResponse { data }))
}

/// GET /admin/topics/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TopicDetail>>> {
    let topic = TopicRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))?;
    let answers = AnswerRepo::list_for_topic(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: TopicDetail {
            topic: TopicView::from_row(topic, &state.config.cdn_base_url),
            answers,
        },
    }))
}

/// POST /admin/topics
///
/// Appends the new topic at the end of its category's manual order.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateTopicRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<TopicView>>)> {
    let create = CreateTopic {
        category_id: input.category_id,
        title: input.title,
        definition: input.definition,
        summary: input.summary,
        thumbnail_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.thumbnail_url.as_deref(),
        ),
        created_by: Some(user.name),
    };
    let created = TopicRepo::create(&state.pool, &create).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: TopicView::from_row(created, &state.config.cdn_base_url),
        }),
    ))
}

/// PUT /admin/topics/{id}
///
/// Field edit plus the answer upsert batch, one transaction. The batch is
/// validated up front; a missing update target is skipped with a warning.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateTopicRequest>,
) -> AppResult<Json<DataResponse<TopicDetail>>> {
    if let Some(flag) = input.visibility.as_deref() {
        visibility::validate_visibility(flag).map_err(AppError::Core)?;
    }
    let changes = answers::plan_changes(&input.answers).map_err(AppError::Core)?;

    let update = UpdateTopic {
        category_id: input.category_id,
        title: input.title,
        definition: input.definition,
        summary: input.summary,
        thumbnail_path: media::path_from_url(
            &state.config.cdn_base_url,
            input.thumbnail_url.as_deref(),
        ),
        visibility: input.visibility,
    };
    let updated = TopicRepo::modify(
        &state.pool,
        id,
        &update,
        &changes,
        MissingTargetPolicy::Skip,
        Some(&user.name),
    )
    .await?;

    let answers = AnswerRepo::list_for_topic(&state.pool, id).await?;
    Ok(Json(DataResponse {
        data: TopicDetail {
            topic: TopicView::from_row(updated, &state.config.cdn_base_url),
            answers,
        },
    }))
}
