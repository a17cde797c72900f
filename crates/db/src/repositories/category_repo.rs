//! Repository for the `categories` table.

use sqlx::PgPool;

use finlit_core::error::CoreError;
use finlit_core::ordering::{self, ReorderBatch};
use finlit_core::types::DbId;

use crate::models::category::{Category, CreateCategory, TopicMove, UpdateCategory};
use crate::repositories::{lock_scope, next_topic_position};
use crate::DbError;

/// Column list for categories queries.
const COLUMNS: &str =
    "id, name, thumbnail_path, visibility, position, created_by, created_at, updated_at";

/// Advisory-lock scope for category position appends.
const ORDER_SCOPE: &str = "categories:position";

/// Provides CRUD, ordering, and topic re-homing for categories.
pub struct CategoryRepo;

impl CategoryRepo {
    /// List categories in manual order, optionally filtered by visibility.
    pub async fn list(pool: &PgPool, visibility: Option<&str>) -> Result<Vec<Category>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM categories
             WHERE ($1::text IS NULL OR visibility = $1)
             ORDER BY position ASC"
        );
        sqlx::query_as::<_, Category>(&query)
            .bind(visibility)
            .fetch_all(pool)
            .await
    }

    /// Find a category by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE id = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a category by exact name.
    pub async fn find_by_name(pool: &PgPool, name: &str) -> Result<Option<Category>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM categories WHERE name = $1");
        sqlx::query_as::<_, Category>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create a category, appending it at the end of the manual order.
    ///
    /// The max-position read and the insert share a transaction holding
    /// the scope's advisory lock, so concurrent creates cannot collide.
    pub async fn create(pool: &PgPool, input: &CreateCategory) -> Result<Category, sqlx::Error> {
        let mut tx = pool.begin().await?;
        lock_scope(&mut tx, ORDER_SCOPE).await?;

        let max: Option<i64> = sqlx::query_scalar("SELECT MAX(position) FROM categories")
            .fetch_one(&mut *tx)
            .await?;
        let position = ordering::next_position(max);

        let query = format!(
            "INSERT INTO categories (name, thumbnail_path, position, created_by)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Category>(&query)
            .bind(&input.name)
            .bind(&input.thumbnail_path)
            .bind(position)
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Modify a category's own fields and re-home the listed topics to
    /// their new categories, atomically.
    ///
    /// Any missing topic or target category aborts the whole edit with no
    /// mutation applied.
    pub async fn modify(
        pool: &PgPool,
        id: DbId,
        input: &UpdateCategory,
        topic_moves: &[TopicMove],
    ) -> Result<Category, DbError> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "UPDATE categories SET
                name = COALESCE($2, name),
                thumbnail_path = COALESCE($3, thumbnail_path),
                visibility = COALESCE($4, visibility),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Category>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.thumbnail_path)
            .bind(&input.visibility)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: "Category",
                id,
            })?;

        for mv in topic_moves {
            let target_exists: bool =
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM categories WHERE id = $1)")
                    .bind(mv.category_id)
                    .fetch_one(&mut *tx)
                    .await?;
            if !target_exists {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id: mv.category_id,
                }
                .into());
            }

            let current_category: Option<DbId> =
                sqlx::query_scalar("SELECT category_id FROM topics WHERE id = $1 FOR UPDATE")
                    .bind(mv.topic_id)
                    .fetch_optional(&mut *tx)
                    .await?;
            let Some(current_category) = current_category else {
                return Err(CoreError::NotFound {
                    entity: "Topic",
                    id: mv.topic_id,
                }
                .into());
            };
            if current_category == mv.category_id {
                continue;
            }

            // Append at the end of the target category's order; the old
            // position belongs to the source category's sequence.
            let position = next_topic_position(&mut tx, mv.category_id).await?;
            sqlx::query(
                "UPDATE topics SET category_id = $2, position = $3, updated_at = now()
                 WHERE id = $1",
            )
            .bind(mv.topic_id)
            .bind(mv.category_id)
            .bind(position)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(updated)
    }

    /// Apply a reorder batch to category positions, all-or-nothing.
    ///
    /// Pairs are applied in ascending id order; a pair whose id does not
    /// exist rolls back the entire batch.
    pub async fn update_positions(pool: &PgPool, batch: &ReorderBatch) -> Result<(), DbError> {
        ordering::validate_reorder_batch(batch)?;

        let mut tx = pool.begin().await?;
        lock_scope(&mut tx, ORDER_SCOPE).await?;

        for (&id, &position) in batch {
            let result =
                sqlx::query("UPDATE categories SET position = $2, updated_at = now() WHERE id = $1")
                    .bind(id)
                    .bind(position)
                    .execute(&mut *tx)
                    .await?;
            if result.rows_affected() != 1 {
                return Err(CoreError::NotFound {
                    entity: "Category",
                    id,
                }
                .into());
            }
        }

        tx.commit().await?;
        Ok(())
    }
}
