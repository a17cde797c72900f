//! Generation audit log model. Immutable once written.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `generation_logs` table. Entity ids are copied at write
/// time; there are no foreign keys.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct GenerationLog {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub topic_id: Option<DbId>,
    pub audience_type_id: Option<DbId>,
    pub prompt: String,
    pub reply: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
}
