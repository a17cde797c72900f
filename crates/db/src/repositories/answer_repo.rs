//! Repository for the `answers` table (per-audience answer rows).

use sqlx::PgPool;

use finlit_core::answers::{AnswerChange, MissingTargetPolicy};
use finlit_core::error::CoreError;
use finlit_core::types::DbId;

use crate::models::answer::Answer;
use crate::DbError;

/// Column list for answers queries.
const COLUMNS: &str = "id, topic_id, audience_type_id, category_id, content, visibility, \
                       created_by, created_at, updated_at";

/// Provides reads and the upsert batch for per-audience answers.
pub struct AnswerRepo;

impl AnswerRepo {
    /// List a topic's answers, sorted by audience type id for a stable
    /// detail view.
    pub async fn list_for_topic(pool: &PgPool, topic_id: DbId) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM answers WHERE topic_id = $1 ORDER BY audience_type_id ASC"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(topic_id)
            .fetch_all(pool)
            .await
    }

    /// Find an answer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a planned answer batch within the caller's transaction.
    ///
    /// Inserts validate the audience type exists (aborting the batch on a
    /// miss); updates touch content/visibility/provenance in place. An
    /// update whose target row is gone follows `policy`: `Skip` warns and
    /// moves on, `Fail` aborts with `NotFound`. Rows not named in the
    /// batch are never touched.
    pub(crate) async fn apply_changes_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        topic_id: DbId,
        category_id: DbId,
        actor: Option<&str>,
        changes: &[AnswerChange],
        policy: MissingTargetPolicy,
    ) -> Result<(), DbError> {
        for change in changes {
            match change {
                AnswerChange::Insert {
                    audience_type_id,
                    content,
                    visibility,
                } => {
                    let audience_exists: bool = sqlx::query_scalar(
                        "SELECT EXISTS(SELECT 1 FROM audience_types WHERE id = $1)",
                    )
                    .bind(audience_type_id)
                    .fetch_one(&mut **tx)
                    .await?;
                    if !audience_exists {
                        return Err(CoreError::NotFound {
                            entity: "AudienceType",
                            id: *audience_type_id,
                        }
                        .into());
                    }

                    sqlx::query(
                        "INSERT INTO answers \
                         (topic_id, audience_type_id, category_id, content, visibility, created_by)
                         VALUES ($1, $2, $3, $4, $5, $6)",
                    )
                    .bind(topic_id)
                    .bind(audience_type_id)
                    .bind(category_id)
                    .bind(content)
                    .bind(visibility)
                    .bind(actor)
                    .execute(&mut **tx)
                    .await?;
                }
                AnswerChange::Update {
                    answer_id,
                    audience_type_id,
                    content,
                    visibility,
                } => {
                    let result = sqlx::query(
                        "UPDATE answers SET
                            audience_type_id = $2,
                            category_id = $3,
                            content = $4,
                            visibility = $5,
                            created_by = COALESCE($6, created_by),
                            updated_at = now()
                         WHERE id = $1 AND topic_id = $7",
                    )
                    .bind(answer_id)
                    .bind(audience_type_id)
                    .bind(category_id)
                    .bind(content)
                    .bind(visibility)
                    .bind(actor)
                    .bind(topic_id)
                    .execute(&mut **tx)
                    .await?;

                    if result.rows_affected() == 0 {
                        match policy {
                            MissingTargetPolicy::Skip => {
                                tracing::warn!(
                                    answer_id,
                                    topic_id,
                                    "Answer update target missing, entry skipped"
                                );
                            }
                            MissingTargetPolicy::Fail => {
                                return Err(CoreError::NotFound {
                                    entity: "Answer",
                                    id: *answer_id,
                                }
                                .into());
                            }
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
