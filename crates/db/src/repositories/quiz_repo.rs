//! Repository for the `quizzes` table and its topic associations.

use chrono::NaiveDate;
use sqlx::PgPool;

use finlit_core::error::CoreError;
use finlit_core::reconcile;
use finlit_core::types::DbId;

use crate::models::quiz::{CreateQuiz, Quiz, UpdateQuiz};
use crate::repositories::ensure_topics_exist;
use crate::DbError;

/// Column list for quizzes queries.
const COLUMNS: &str =
    "id, question, answer, comment, target_date, created_by, created_at, updated_at";

/// Provides CRUD and topic-set reconciliation for quizzes.
pub struct QuizRepo;

impl QuizRepo {
    /// Find a quiz by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE id = $1");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the quiz scheduled for a target date.
    pub async fn find_by_date(pool: &PgPool, date: NaiveDate) -> Result<Option<Quiz>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM quizzes WHERE target_date = $1");
        sqlx::query_as::<_, Quiz>(&query)
            .bind(date)
            .fetch_optional(pool)
            .await
    }

    /// List quizzes with target dates in `[start, end]`, ascending.
    pub async fn list_between(
        pool: &PgPool,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<Vec<Quiz>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM quizzes
             WHERE target_date BETWEEN $1 AND $2
             ORDER BY target_date ASC"
        );
        sqlx::query_as::<_, Quiz>(&query)
            .bind(start)
            .bind(end)
            .fetch_all(pool)
            .await
    }

    /// Topic ids associated with a quiz, in insertion order.
    pub async fn topic_ids(pool: &PgPool, quiz_id: DbId) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT topic_id FROM topic_quizzes WHERE quiz_id = $1 ORDER BY id ASC")
            .bind(quiz_id)
            .fetch_all(pool)
            .await
    }

    /// Create a quiz together with its topic associations.
    ///
    /// Fails `Conflict` when the target date is taken and `NotFound` when
    /// any topic id is unknown; in both cases nothing is inserted.
    pub async fn create(
        pool: &PgPool,
        input: &CreateQuiz,
        topic_ids: &[DbId],
    ) -> Result<Quiz, DbError> {
        let mut tx = pool.begin().await?;

        let date_taken: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM quizzes WHERE target_date = $1)")
                .bind(input.target_date)
                .fetch_one(&mut *tx)
                .await?;
        if date_taken {
            return Err(CoreError::Conflict(format!(
                "A quiz already exists for {}",
                input.target_date
            ))
            .into());
        }

        ensure_topics_exist(&mut tx, topic_ids).await?;

        let query = format!(
            "INSERT INTO quizzes (question, answer, comment, target_date, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let created = sqlx::query_as::<_, Quiz>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.comment)
            .bind(input.target_date)
            .bind(&input.created_by)
            .fetch_one(&mut *tx)
            .await?;

        for &topic_id in &reconcile::dedup_preserving_order(topic_ids) {
            sqlx::query("INSERT INTO topic_quizzes (topic_id, quiz_id) VALUES ($1, $2)")
                .bind(topic_id)
                .bind(created.id)
                .execute(&mut *tx)
                .await?;
        }

        tx.commit().await?;
        Ok(created)
    }

    /// Modify a quiz's fields and reconcile its topic set, atomically.
    ///
    /// `target_date` and `id` must resolve to the same quiz (the admin UI
    /// addresses quizzes by calendar day). The quiz row is locked
    /// `FOR UPDATE` for the duration, serializing concurrent reconciles.
    pub async fn modify(
        pool: &PgPool,
        id: DbId,
        target_date: NaiveDate,
        input: &UpdateQuiz,
        topic_ids: &[DbId],
        actor: Option<&str>,
    ) -> Result<Quiz, DbError> {
        let mut tx = pool.begin().await?;

        let by_date: Option<DbId> =
            sqlx::query_scalar("SELECT id FROM quizzes WHERE target_date = $1 FOR UPDATE")
                .bind(target_date)
                .fetch_optional(&mut *tx)
                .await?;
        let date_id = by_date.ok_or(CoreError::NotFound {
            entity: "Quiz",
            id,
        })?;
        if date_id != id {
            return Err(CoreError::Validation(format!(
                "Quiz id {id} does not match the quiz scheduled for {target_date} (id {date_id})"
            ))
            .into());
        }

        ensure_topics_exist(&mut tx, topic_ids).await?;
        Self::reconcile_topics_inner(&mut tx, id, topic_ids).await?;

        let query = format!(
            "UPDATE quizzes SET
                question = COALESCE($2, question),
                answer = COALESCE($3, answer),
                comment = COALESCE($4, comment),
                created_by = COALESCE($5, created_by),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let updated = sqlx::query_as::<_, Quiz>(&query)
            .bind(id)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(&input.comment)
            .bind(actor)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(updated)
    }

    /// Reconcile the stored topic set against the requested list within
    /// an existing transaction. Only the symmetric difference is touched.
    async fn reconcile_topics_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        quiz_id: DbId,
        requested: &[DbId],
    ) -> Result<(), DbError> {
        let current: Vec<DbId> = sqlx::query_scalar(
            "SELECT topic_id FROM topic_quizzes WHERE quiz_id = $1 ORDER BY id ASC",
        )
        .bind(quiz_id)
        .fetch_all(&mut **tx)
        .await?;

        let plan = reconcile::plan(&current, requested);
        if plan.is_noop() {
            return Ok(());
        }

        if !plan.to_remove.is_empty() {
            sqlx::query("DELETE FROM topic_quizzes WHERE quiz_id = $1 AND topic_id = ANY($2)")
                .bind(quiz_id)
                .bind(&plan.to_remove)
                .execute(&mut **tx)
                .await?;
        }
        for &topic_id in &plan.to_insert {
            sqlx::query("INSERT INTO topic_quizzes (topic_id, quiz_id) VALUES ($1, $2)")
                .bind(topic_id)
                .bind(quiz_id)
                .execute(&mut **tx)
                .await?;
        }
        Ok(())
    }
}
