//! Prompt template model: append-only history, latest-wins reads.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `prompt_templates` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PromptTemplate {
    pub id: DbId,
    pub template: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
}
