//! Banner model: promotional slots on the product home screen.

use finlit_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `banners` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Banner {
    pub id: DbId,
    pub title: String,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub landing_url: Option<String>,
    pub visibility: String,
    pub created_by: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a banner.
#[derive(Debug, Clone)]
pub struct CreateBanner {
    pub title: String,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub landing_url: Option<String>,
    pub created_by: Option<String>,
}

/// DTO for modifying a banner.
#[derive(Debug, Clone)]
pub struct UpdateBanner {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub image_path: Option<String>,
    pub landing_url: Option<String>,
    pub visibility: Option<String>,
}
