//! Category model: the top level of the taxonomy.

use finlit_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `categories` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Category {
    pub id: DbId,
    pub name: String,
    pub thumbnail_path: Option<String>,
    pub visibility: String,
    pub position: i64,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a category. Position is assigned by the repository.
#[derive(Debug, Clone)]
pub struct CreateCategory {
    pub name: String,
    pub thumbnail_path: Option<String>,
    pub created_by: Option<String>,
}

/// DTO for modifying a category's own fields.
#[derive(Debug, Clone)]
pub struct UpdateCategory {
    pub name: Option<String>,
    pub thumbnail_path: Option<String>,
    pub visibility: Option<String>,
}

/// One topic re-homing instruction inside a category edit.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct TopicMove {
    pub topic_id: DbId,
    pub category_id: DbId,
}
