//! Audience type model: the persona an answer is written for.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `audience_types` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct AudienceType {
    pub id: DbId,
    pub name: String,
    pub profile: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating an audience type.
#[derive(Debug, Clone)]
pub struct CreateAudienceType {
    pub name: String,
    pub profile: Option<String>,
    pub created_by: Option<String>,
}

/// DTO for modifying an audience type.
#[derive(Debug, Clone)]
pub struct UpdateAudienceType {
    pub name: Option<String>,
    pub profile: Option<String>,
    pub visibility: Option<String>,
}
