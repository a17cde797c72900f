//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods that
//! accept `&PgPool` as the first argument. Operations that must be atomic
//! (create-with-position, association reconciliation, answer batches,
//! reorder batches) open a transaction internally and commit only after
//! every step succeeded.

pub mod answer_repo;
pub mod audience_type_repo;
pub mod banner_repo;
pub mod category_repo;
pub mod column_repo;
pub mod generation_log_repo;
pub mod prompt_repo;
pub mod quiz_repo;
pub mod topic_repo;

pub use answer_repo::AnswerRepo;
pub use audience_type_repo::AudienceTypeRepo;
pub use banner_repo::BannerRepo;
pub use category_repo::CategoryRepo;
pub use column_repo::ColumnRepo;
pub use generation_log_repo::GenerationLogRepo;
pub use prompt_repo::PromptRepo;
pub use quiz_repo::QuizRepo;
pub use topic_repo::TopicRepo;

use finlit_core::error::CoreError;
use finlit_core::ordering;
use finlit_core::types::DbId;

/// Advisory-lock scope for topic position changes, keyed per category.
pub(crate) fn topic_order_scope(category_id: DbId) -> String {
    format!("topics:position:{category_id}")
}

/// Next append position in a category's topic order.
///
/// Takes the category's advisory lock before reading the max, so every
/// concurrent append (create or re-home) into the same category
/// serializes on the scope.
pub(crate) async fn next_topic_position(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    category_id: DbId,
) -> Result<i64, sqlx::Error> {
    lock_scope(tx, &topic_order_scope(category_id)).await?;
    let max: Option<i64> =
        sqlx::query_scalar("SELECT MAX(position) FROM topics WHERE category_id = $1")
            .bind(category_id)
            .fetch_one(&mut **tx)
            .await?;
    Ok(ordering::next_position(max))
}

/// Take the transaction-scoped advisory lock for a position scope.
///
/// Serializes appends (and anything else keyed on the same scope string)
/// for the duration of the transaction.
pub(crate) async fn lock_scope(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    scope_key: &str,
) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1, 0))")
        .bind(scope_key)
        .execute(&mut **tx)
        .await?;
    Ok(())
}

/// Verify that every id in `ids` exists in `topics`, returning `NotFound`
/// with the first missing id otherwise. A single batch query regardless of
/// list size.
pub(crate) async fn ensure_topics_exist(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    ids: &[DbId],
) -> Result<(), crate::DbError> {
    if ids.is_empty() {
        return Ok(());
    }
    let found: Vec<DbId> = sqlx::query_scalar("SELECT id FROM topics WHERE id = ANY($1)")
        .bind(ids)
        .fetch_all(&mut **tx)
        .await?;
    if let Some(&missing) = ids.iter().find(|id| !found.contains(id)) {
        return Err(CoreError::NotFound {
            entity: "Topic",
            id: missing,
        }
        .into());
    }
    Ok(())
}
