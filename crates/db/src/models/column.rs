//! Content column model: an editorial article linked to topics.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `content_columns` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct ContentColumn {
    pub id: DbId,
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_path: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a content column. Topic associations are passed
/// separately.
#[derive(Debug, Clone)]
pub struct CreateColumn {
    pub title: String,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_path: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
}

/// DTO for modifying a content column's own fields.
#[derive(Debug, Clone)]
pub struct UpdateColumn {
    pub title: Option<String>,
    pub summary: Option<String>,
    pub content: Option<String>,
    pub background_path: Option<String>,
    pub visibility: Option<String>,
}
