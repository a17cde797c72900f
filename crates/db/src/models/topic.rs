//! Topic model: a concept explained under one category.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `topics` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Topic {
    pub id: DbId,
    pub category_id: DbId,
    pub title: String,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_path: Option<String>,
    pub visibility: String,
    pub position: i64,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a topic. Position is assigned within the category.
#[derive(Debug, Clone)]
pub struct CreateTopic {
    pub category_id: DbId,
    pub title: String,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_path: Option<String>,
    pub created_by: Option<String>,
}

/// DTO for modifying a topic's own fields (the answer batch rides
/// alongside, see `AnswerRepo::apply_changes`).
#[derive(Debug, Clone)]
pub struct UpdateTopic {
    pub category_id: Option<DbId>,
    pub title: Option<String>,
    pub definition: Option<String>,
    pub summary: Option<String>,
    pub thumbnail_path: Option<String>,
    pub visibility: Option<String>,
}
