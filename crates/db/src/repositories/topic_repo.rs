//! Repository for the `topics` table.

use sqlx::PgPool;

use finlit_core::answers::{AnswerChange, MissingTargetPolicy};
use finlit_core::error::CoreError;
use finlit_core::ordering::{self, ReorderBatch};
use finlit_core::types::DbId;

use crate::models::topic::{CreateTopic, Topic, UpdateTopic};
use crate::repositories::{answer_repo::AnswerRepo, lock_scope, next_topic_position, topic_order_scope};
use crate::DbError;

/// Column list for topics queries.
const COLUMNS: &str = "id, category_id, title, definition, summary, thumbnail_path, \
                       visibility, position, created_by, created_at, updated_at";

/// Provides CRUD, ordering, and the answer upsert batch for topics.
pub struct TopicRepo;

impl TopicRepo {
    /// List topics in manual order, optionally filtered by category and
    /// visibility.
    pub async fn list(
        pool: &PgPool,
        category_id: Option<DbId>,
        visibility: Option<&str>,
    ) -> Result<Vec<Topic>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM topics
             WHERE ($1::bigint IS NULL OR category_id = $1)
               AND ($2::text IS NULL OR visibility = $2)
             ORDER BY category_id ASC, position ASC"
        );
        sqlx::query_as::<_, Topic>(&query)
            .bind(category_id)
            .bind(visibility)
            .fetch_all(pool)
            .await
    }

    /// Find a topic by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Topic>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM topics WHERE id = $1");
        sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a topic, appending it at the end of its category's order.
    ///
    /// Fails `NotFound` when the category does not exist. The position
    /// read and the insert share a per-category advisory lock.
    pub async fn create(pool: &PgPool, input: &CreateTopic) -> Result<Topic, DbError> {
        let mut tx = pool.begin().await?;

        let category_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                .bind(input.category_id)
                .fetch_one(&mut *tx)
                .await?;
        if !category_exists {
            return Err(CoreError::NotFound {
                entity: "Category",
                id: input.category_id,
            }
            .into());
        }

        let position = next_topic_position(&mut tx, input.category_id).await?;

        let query = format!(
            "INSERT INTO topics (category_id, title, definition, summary, thumbnail_path, \
                                 position, created_by)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Topic>(&query)
            .bind(input.category_id)
            .bind(&input.title)
            .bind(&input.definition)
            .bind(&input.summary)
            .bind(&input.thumbnail_path)
            .bind(position)
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Modify a topic's fields and apply its answer upsert batch in one
    /// transaction.
    ///
    /// The topic row is locked `FOR UPDATE`, serializing concurrent edits
    /// (and their answer batches) per topic. Any validation failure rolls
    /// back the whole edit.
    pub async fn modify(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTopic,
        changes: &[AnswerChange],
        policy: MissingTargetPolicy,
        actor: Option<&str>,
    ) -> Result<Topic, DbError> {
        let mut tx = pool.begin().await?;

        let current = sqlx::query_as::<_, Topic>(&format!(
            "SELECT {COLUMNS} FROM topics WHERE id = $1 FOR UPDATE"
        ))
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Topic",
            id,
        })?;

        let category_id = input.category_id.unwrap_or(current.category_id);
        // Re-homing appends at the end of the target category's order;
        // keeping the old position would collide with the target's rows.
        let mut position: Option<i64> = None;
        if category_id != current.category_id {
            let exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                    .bind(category_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !exists {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id: category_id,
                }
                .into());
            }
            position = Some(next_topic_position(&mut tx, category_id).await?);
        }

        let query = format!(
            "UPDATE topics SET
                category_id = $2,
                position = COALESCE($3, position),
                title = COALESCE($4, title),
                definition = COALESCE($5, definition),
                summary = COALESCE($6, summary),
                thumbnail_path = COALESCE($7, thumbnail_path),
                visibility = COALESCE($8, visibility),
                created_by = COALESCE($9, created_by),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Topic>(&query)
            .bind(id)
            .bind(category_id)
            .bind(position)
            .bind(&input.title)
            .bind(&input.definition)
            .bind(&input.summary)
            .bind(&input.thumbnail_path)
            .bind(&input.visibility)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        AnswerRepo::apply_changes_inner(&mut tx, id, category_id, actor, changes, policy).await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Apply a reorder batch to topic positions, all-or-nothing.
    ///
    /// Locks every affected category's order scope first (in ascending
    /// category id order) so reorders serialize against appends and
    /// re-homes into the same categories.
    pub async fn update_positions(pool: &PgPool, batch: &ReorderBatch) -> Result<(), DbError> {
        ordering::validate_reorder_batch(batch)?;

        let mut tx = pool.begin().await?;

        let ids: Vec<DbId> = batch.keys().copied().collect();
        let category_ids: Vec<DbId> = sqlx::query_scalar(
            "SELECT DISTINCT category_id FROM topics WHERE id = ANY($1) ORDER BY category_id",
        )
        .bind(&ids)
        .fetch_all(&mut *tx)
        .await?;
        for category_id in category_ids {
            lock_scope(&mut tx, &topic_order_scope(category_id)).await?;
        }

        for (&id, &position) in batch {
            let result =
                sqlx::query("UPDATE topics SET position = $2, updated_at = now() WHERE id = $1")
                    .bind(id)
                    .bind(position)
                    .execute(&mut *tx)
                    .await?;
            if result.rows_affected() != 1 {
                return Err(CoreError::NotFound {
                    entity: "Topic",
                    id,
                }
                .into());
            }
        }

        tx.commit().await?;
        Ok(())
    }
}
