//! Handlers for the `/admin/quizzes` resource.
//!
//! Quizzes are addressed by calendar day in the admin UI: one quiz per
//! target date, monthly listing, daily detail. Edits carry the full
//! desired topic set, reconciled against storage.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use finlit_core::error::CoreError;
use finlit_core::quiz;
use finlit_core::types::DbId;
use finlit_db::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};
use finlit_db::repositories::QuizRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// A quiz with its associated topic ids.
#[derive(Debug, Serialize)]
pub struct QuizDetail {
    #[serde(flatten)]
    pub quiz: Quiz,
    pub topic_ids: Vec<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct CreateQuizRequest {
    pub question: String,
    pub answer: String,
    pub comment: Option<String>,
    pub target_date: NaiveDate,
    #[serde(default)]
    pub topic_ids: Vec<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateQuizRequest {
    /// The calendar day this edit addresses; must resolve to `{id}`.
    pub target_date: NaiveDate,
    pub question: Option<String>,
    pub answer: Option<String>,
    pub comment: Option<String>,
    #[serde(default)]
    pub topic_ids: Vec<DbId>,
}

#[derive(Debug, Deserialize)]
pub struct MonthlyParams {
    pub year: i32,
    pub month: u32,
}

#[derive(Debug, Deserialize)]
pub struct DailyParams {
    pub date: NaiveDate,
}

/// GET /admin/quizzes/monthly?year=&month=
pub async fn list_monthly(
    State(state): State<AppState>,
    Query(params): Query<MonthlyParams>,
) -> AppResult<Json<DataResponse<Vec<Quiz>>>> {
    let start = NaiveDate::from_ymd_opt(params.year, params.month, 1).ok_or_else(|| {
        AppError::BadRequest(format!(
            "Invalid month: {}-{:02}",
            params.year, params.month
        ))
    })?;
    // First day of the next month, minus one day.
    let end = start
        .checked_add_months(chrono::Months::new(1))
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::BadRequest("Date out of range".into()))?;

    let data = QuizRepo::list_between(&state.pool, start, end).await?;
    Ok(Json(DataResponse { data }))
}

/// GET /admin/quizzes/daily?date=
pub async fn get_daily(
    State(state): State<AppState>,
    Query(params): Query<DailyParams>,
) -> AppResult<Json<DataResponse<Option<QuizDetail>>>> {
    let quiz = QuizRepo::find_by_date(&state.pool, params.date).await?;
    let data = match quiz {
        Some(quiz) => {
            let topic_ids = QuizRepo::topic_ids(&state.pool, quiz.id).await?;
            Some(QuizDetail { quiz, topic_ids })
        }
        None => None,
    };
    Ok(Json(DataResponse { data }))
}

/// GET /admin/quizzes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QuizDetail>>> {
    let quiz = QuizRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Quiz", id }))?;
    let topic_ids = QuizRepo::topic_ids(&state.pool, quiz.id).await?;
    Ok(Json(DataResponse {
        data: QuizDetail { quiz, topic_ids },
    }))
}

/// POST /admin/quizzes
///
/// Creates the quiz and its topic associations atomically; a taken target
/// date or an unknown topic id leaves nothing behind.
pub async fn create(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<CreateQuizRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<QuizDetail>>)> {
    quiz::validate_mark(&input.answer).map_err(AppError::Core)?;

    let create = CreateQuiz {
        question: input.question,
        answer: input.answer,
        comment: input.comment,
        target_date: input.target_date,
        created_by: Some(user.name),
    };
    let quiz = QuizRepo::create(&state.pool, &create, &input.topic_ids).await?;
    let topic_ids = QuizRepo::topic_ids(&state.pool, quiz.id).await?;
    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: QuizDetail { quiz, topic_ids },
        }),
    ))
}

/// PUT /admin/quizzes/{id}
///
/// Field edit plus topic-set reconciliation. `target_date` must resolve
/// to the same quiz as `{id}`.
pub async fn update(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateQuizRequest>,
) -> AppResult<Json<DataResponse<QuizDetail>>> {
    if let Some(mark) = input.answer.as_deref() {
        quiz::validate_mark(mark).map_err(AppError::Core)?;
    }

    let update = UpdateQuiz {
        question: input.question,
        answer: input.answer,
        comment: input.comment,
    };
    let quiz = QuizRepo::modify(
        &state.pool,
        id,
        input.target_date,
        &update,
        &input.topic_ids,
        Some(&user.name),
    )
    .await?;
    let topic_ids = QuizRepo::topic_ids(&state.pool, quiz.id).await?;
    Ok(Json(DataResponse {
        data: QuizDetail { quiz, topic_ids },
    }))
}
