//! Handlers for the generation assistant endpoints.
//!
//! Every request follows the same lifecycle: build the prompt, call the
//! chat-completion service, write the audit log, then extract the
//! structured payload. The log write is best-effort -- a failure there is
//! traced and never fails the request -- while a missing format prefix
//! surfaces the raw reply to the operator instead of a 200.
//!
//! Nothing here mutates taxonomy rows; the operator reviews the draft and
//! saves it through the regular edit endpoints.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use finlit_core::error::CoreError;
use finlit_core::extract::{self, ANSWER_PREFIX, SUMMARY_PREFIX};
use finlit_core::generation::{self, GenerationScope};
use finlit_core::template::{self, PromptBindings};
use finlit_core::types::DbId;
use finlit_db::repositories::{
    AudienceTypeRepo, CategoryRepo, GenerationLogRepo, PromptRepo, TopicRepo,
};

use crate::error::{AppError, AppResult};
use crate::middleware::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct AnswerGenerationRequest {
    pub audience_type_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct SubjectRequest {
    pub subject: String,
}

/// A generated draft: the prompt that was sent and the extracted payload.
#[derive(Debug, Serialize)]
pub struct GeneratedDraft {
    pub prompt: String,
    pub content: String,
}

/// POST /admin/topics/{id}/answer-generation
///
/// Drafts a per-audience explanation by filling the latest stored prompt
/// template with the topic's taxonomy coordinates.
pub async fn generate_answer(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
    Json(input): Json<AnswerGenerationRequest>,
) -> AppResult<Json<DataResponse<GeneratedDraft>>> {
    let topic = TopicRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))?;
    let category = CategoryRepo::find_by_id(&state.pool, topic.category_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Category",
            id: topic.category_id,
        }))?;
    let audience = AudienceTypeRepo::find_by_id(&state.pool, input.audience_type_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "AudienceType",
            id: input.audience_type_id,
        }))?;

    let stored = PromptRepo::latest(&state.pool)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Validation(
                "No prompt template has been saved yet".into(),
            ))
        })?;

    let prompt = template::fill_standard(
        &stored.template,
        &PromptBindings {
            category_name: &category.name,
            topic_title: &topic.title,
            audience_name: &audience.name,
        },
    );
    let leftover = template::unfilled(&prompt);
    if !leftover.is_empty() {
        tracing::warn!(?leftover, template_id = stored.id, "Prompt has unfilled placeholders");
    }

    let reply = state.generator.complete(&prompt).await?;

    let scope = GenerationScope::topic_audience(category.id, topic.id, audience.id);
    log_best_effort(&state, &scope, &prompt, &reply, &user.name).await;

    match extract::extract(&reply, ANSWER_PREFIX) {
        Some(content) => Ok(Json(DataResponse {
            data: GeneratedDraft { prompt, content },
        })),
        None => Err(AppError::ExtractionFailed { reply }),
    }
}

/// POST /admin/topics/{id}/summary-generation
///
/// Drafts a one-sentence topic summary using the built-in prompt.
pub async fn generate_summary(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<GeneratedDraft>>> {
    let topic = TopicRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Topic",
            id,
        }))?;

    let prompt = generation::topic_summary_prompt(&topic.title);
    let reply = state.generator.complete(&prompt).await?;

    let scope = GenerationScope::topic(topic.id);
    log_best_effort(&state, &scope, &prompt, &reply, &user.name).await;

    match extract::extract(&reply, SUMMARY_PREFIX) {
        Some(content) => Ok(Json(DataResponse {
            data: GeneratedDraft { prompt, content },
        })),
        None => Err(AppError::ExtractionFailed { reply }),
    }
}

/// POST /admin/columns/content-generation
///
/// Drafts a column journal body as HTML for an arbitrary subject.
pub async fn generate_column_content(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SubjectRequest>,
) -> AppResult<Json<DataResponse<GeneratedDraft>>> {
    let prompt = generation::column_content_prompt(&input.subject);
    let reply = state.generator.complete(&prompt).await?;

    log_best_effort(&state, &GenerationScope::unscoped(), &prompt, &reply, &user.name).await;

    // The body carries no format prefix; only the code fence is stripped.
    let content = extract::strip_html_fence(&reply);
    Ok(Json(DataResponse {
        data: GeneratedDraft { prompt, content },
    }))
}

/// POST /admin/columns/summary-generation
///
/// Drafts a one-sentence column summary for an arbitrary subject.
pub async fn generate_column_summary(
    State(state): State<AppState>,
    user: AuthUser,
    Json(input): Json<SubjectRequest>,
) -> AppResult<Json<DataResponse<GeneratedDraft>>> {
    let prompt = generation::column_summary_prompt(&input.subject);
    let reply = state.generator.complete(&prompt).await?;

    log_best_effort(&state, &GenerationScope::unscoped(), &prompt, &reply, &user.name).await;

    match extract::extract(&reply, SUMMARY_PREFIX) {
        Some(content) => Ok(Json(DataResponse {
            data: GeneratedDraft { prompt, content },
        })),
        None => Err(AppError::ExtractionFailed { reply }),
    }
}

/// Write the audit log row; trace and move on if the write fails.
async fn log_best_effort(
    state: &AppState,
    scope: &GenerationScope,
    prompt: &str,
    reply: &str,
    actor: &str,
) {
    if let Err(err) =
        GenerationLogRepo::record(&state.pool, scope, prompt, reply, Some(actor)).await
    {
        tracing::error!(error = %err, "Failed to write generation log");
    }
}
