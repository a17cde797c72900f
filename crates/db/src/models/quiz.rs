//! Daily quiz model.

use chrono::NaiveDate;
use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `quizzes` table. One quiz per target date.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Quiz {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub comment: Option<String>,
    pub target_date: NaiveDate,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a quiz. Topic associations are passed separately.
#[derive(Debug, Clone)]
pub struct CreateQuiz {
    pub question: String,
    pub answer: String,
    pub comment: Option<String>,
    pub target_date: NaiveDate,
    pub created_by: Option<String>,
}

/// DTO for modifying a quiz's own fields.
#[derive(Debug, Clone)]
pub struct UpdateQuiz {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub comment: Option<String>,
}
