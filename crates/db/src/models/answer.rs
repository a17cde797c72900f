//! Per-audience answer model.
//!
//! Logically keyed by (topic, audience type); the storage layer does not
//! enforce uniqueness of the pair. `category_id` is denormalized at write
//! time for the audit trail.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Answer {
    pub id: DbId,
    pub topic_id: DbId,
    pub audience_type_id: DbId,
    pub category_id: DbId,
    pub content: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
