//! Repository for the `banners` table.

use sqlx::PgPool;

use finlit_core::error::CoreError;
use finlit_core::types::DbId;

use crate::models::banner::{Banner, CreateBanner, UpdateBanner};
use crate::DbError;

/// Column list for banners queries.
const COLUMNS: &str = "id, title, subtitle, image_path, landing_url, visibility, \
                       created_by, created_at, updated_at";

/// Provides CRUD for home-screen banners.
pub struct BannerRepo;

impl BannerRepo {
    /// List banners, newest first, optionally filtered by visibility.
    pub async fn list(pool: &PgPool, visibility: Option<&str>) -> Result<Vec<Banner>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM banners
             WHERE ($1::text IS NULL OR visibility = $1)
             ORDER BY id DESC"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(visibility)
            .fetch_all(pool)
            .await
    }

    /// Find a banner by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Banner>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM banners WHERE id = $1");
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Create a banner.
    pub async fn create(pool: &PgPool, input: &CreateBanner) -> Result<Banner, sqlx::Error> {
        let query = format!(
            "INSERT INTO banners (title, subtitle, image_path, landing_url, created_by)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.landing_url)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Modify a banner's fields.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateBanner) -> Result<Banner, DbError> {
        let query = format!(
            "UPDATE banners SET
                title = COALESCE($2, title),
                subtitle = COALESCE($3, subtitle),
                image_path = COALESCE($4, image_path),
                landing_url = COALESCE($5, landing_url),
                visibility = COALESCE($6, visibility),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Banner>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.subtitle)
            .bind(&input.image_path)
            .bind(&input.landing_url)
            .bind(&input.visibility)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "Banner",
                    id,
                }
                .into()
            })
    }

    /// Delete a banner.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<(), DbError> {
        let result = sqlx::query("DELETE FROM banners WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        if result.rows_affected() != 1 {
            return Err(CoreError::NotFound {
                entity: "Banner",
                id,
            }
            .into());
        }
        Ok(())
    }
}
