//! Repository for the `generation_logs` table.
//!
//! Logs are append-only and carry no foreign keys, so audit history
//! survives deletion of the entities it references.

use sqlx::PgPool;

use finlit_core::generation::GenerationScope;
use finlit_core::types::DbId;

use crate::models::generation_log::GenerationLog;

/// Column list for generation_logs queries.
const COLUMNS: &str =
    "id, category_id, topic_id, audience_type_id, prompt, reply, created_by, created_at";

/// Provides the append-only generation audit log.
pub struct GenerationLogRepo;

impl GenerationLogRepo {
    /// Record one generation exchange. Returns the new log row's id.
    pub async fn record(
        pool: &PgPool,
        scope: &GenerationScope,
        prompt: &str,
        reply: &str,
        created_by: Option<&str>,
    ) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar(
            "INSERT INTO generation_logs \
             (category_id, topic_id, audience_type_id, prompt, reply, created_by)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(scope.category_id)
        .bind(scope.topic_id)
        .bind(scope.audience_type_id)
        .bind(prompt)
        .bind(reply)
        .bind(created_by)
        .fetch_one(pool)
        .await
    }

    /// List log entries, newest first, optionally filtered by topic and
    /// audience type.
    pub async fn list(
        pool: &PgPool,
        topic_id: Option<DbId>,
        audience_type_id: Option<DbId>,
    ) -> Result<Vec<GenerationLog>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM generation_logs
             WHERE ($1::bigint IS NULL OR topic_id = $1)
               AND ($2::bigint IS NULL OR audience_type_id = $2)
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, GenerationLog>(&query)
            .bind(topic_id)
            .bind(audience_type_id)
            .fetch_all(pool)
            .await
    }
}
