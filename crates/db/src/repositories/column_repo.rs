//! Repository for the `content_columns` table and its topic associations.

use sqlx::PgPool;

use finlit_core::error::CoreError;
use finlit_core::reconcile;
use finlit_core::types::DbId;

use crate::models::column::{ContentColumn, CreateColumn, UpdateColumn};
use crate::repositories::ensure_topics_exist;
use crate::DbError;

/// Column list for content_columns queries.
const COLUMNS: &str = "id, title, summary, content, background_path, visibility, \
                       created_by, created_at, updated_at";

/// Provides CRUD and topic-set reconciliation for content columns.
pub struct ColumnRepo;

impl ColumnRepo {
    /// List columns, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContentColumn>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_columns ORDER BY id DESC");
        sqlx::query_as::<_, ContentColumn>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a column by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ContentColumn>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM content_columns WHERE id = $1");
        sqlx::query_as::<_, ContentColumn>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Topic ids associated with a column, in insertion order.
    pub async fn topic_ids(pool: &PgPool, column_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT topic_id FROM topic_columns WHERE column_id = $1 ORDER BY id ASC")
            .bind(column_id)
            .fetch_all(pool)
            .await
    }

    /// Create a column together with its topic associations, atomically.
    pub async fn create(
        pool: &PgPool,
        input: &CreateColumn,
        topic_ids: &[DbId],
    ) -> Result<ContentColumn, DbError> {
        let mut tx = pool.begin().await?;

        ensure_topics_exist(&mut tx, topic_ids).await?;

        let query = format!(
            "INSERT INTO content_columns \
             (title, summary, content, background_path, visibility, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, ContentColumn>(&query)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.content)
            .bind(&input.background_path)
            .bind(&input.visibility)
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        for &topic_id in &reconcile::dedup_preserving_order(topic_ids) {
            sqlx::query("INSERT INTO topic_columns (topic_id, column_id) VALUES ($1, $2)")
                .bind(topic_id)
                .bind(created.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Modify a column's fields and reconcile its topic set, atomically.
    ///
    /// The column row is locked `FOR UPDATE`; only the symmetric
    /// difference of the topic sets is touched.
    pub async fn modify(
        pool: &PgPool,
        id: DbId,
        input: &UpdateColumn,
        topic_ids: &[DbId],
        actor: Option<&str>,
    ) -> Result<ContentColumn, DbError> {
        let mut tx = pool.begin().await?;

        let exists: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM content_columns WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        if exists.is_none() {
            return Err(CoreError::NotFound {
                entity: "ContentColumn",
                id,
            }
            .into());
        }

        ensure_topics_exist(&mut tx, topic_ids).await?;

        let current: Vec<DbId> = sqlx::query_scalar(
            "SELECT topic_id FROM topic_columns WHERE column_id = $1 ORDER BY id ASC",
        )
        .bind(id)
        .fetch_all(&mut *tx)
        .await?;

        let plan = reconcile::plan(&current, topic_ids);
        if !plan.to_remove.is_empty() {
            sqlx::query("DELETE FROM topic_columns WHERE column_id = $1 AND topic_id = ANY($2)")
                .bind(id)
                .bind(&plan.to_remove)
                .execute(&mut *tx)
                .await?;
        }
        for &topic_id in &plan.to_insert {
            sqlx::query("INSERT INTO topic_columns (topic_id, column_id) VALUES ($1, $2)")
                .bind(topic_id)
                .bind(id)
                .execute(&mut *tx)
                .await?;
        }

        let query = format!(
            "UPDATE content_columns SET
                title = COALESCE($2, title),
                summary = COALESCE($3, summary),
                content = COALESCE($4, content),
                background_path = COALESCE($5, background_path),
                visibility = COALESCE($6, visibility),
                created_by = COALESCE($7, created_by),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, ContentColumn>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.summary)
            .bind(&input.content)
            .bind(&input.background_path)
            .bind(&input.visibility)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }
}
