//! Repository for the `prompt_templates` table.
//!
//! Templates are never edited in place: saving appends a new row, and
//! readers take the highest id. Earlier rows remain as history.

use sqlx::PgPool;

use crate::models::prompt::PromptTemplate;

/// Column list for prompt_templates queries.
const COLUMNS: &str = "id, template, created_by, created_at";

/// Provides the append-only prompt template store.
pub struct PromptRepo;

impl PromptRepo {
    /// Append a new template version.
    pub async fn append(
        pool: &PgPool,
        template: &str,
        created_by: Option<&str>,
    ) -> Result<PromptTemplate, sqlx::Error> {
        let query = format!(
            "INSERT INTO prompt_templates (template, created_by)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PromptTemplate>(&query)
            .bind(template)
            .bind(created_by)
            .fetch_one(pool)
            .await
    }

    /// The most recently saved template, if any.
    pub async fn latest(pool: &PgPool) -> Result<Option<PromptTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_templates ORDER BY id DESC LIMIT 1");
        sqlx::query_as::<_, PromptTemplate>(&query)
            .fetch_optional(pool)
            .await
    }

    /// Full template history, newest first.
    pub async fn history(pool: &PgPool) -> Result<Vec<PromptTemplate>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM prompt_templates ORDER BY id DESC");
        sqlx::query_as::<_, PromptTemplate>(&query)
            .fetch_all(pool)
            .await
    }
}
