//! Repository for the `audience_types` table.

use sqlx::PgPool;

use finlit_core::error::CoreError;
use finlit_core::types::DbId;

use crate::models::audience_type::{AudienceType, CreateAudienceType, UpdateAudienceType};
use crate::DbError;

/// Column list for audience_types queries.
const COLUMNS: &str = "id, name, profile, visibility, created_by, created_at, updated_at";

/// Provides CRUD for audience types.
pub struct AudienceTypeRepo;

impl AudienceTypeRepo {
    /// List audience types, optionally filtered by visibility.
    pub async fn list(
        pool: &PgPool,
        visibility: Option<&str>,
    ) -> Result<Vec<AudienceType>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM audience_types
             WHERE ($1::text IS NULL OR visibility = $1)
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, AudienceType>(&query)
            .bind(visibility)
            .fetch_all(pool)
            .await
    }

    /// Find an audience type by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<AudienceType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audience_types WHERE id = $1");
        sqlx::query_as::<_, AudienceType>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an audience type by exact name.
    pub async fn find_by_name(
        pool: &PgPool,
        name: &str,
    ) -> Result<Option<AudienceType>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM audience_types WHERE name = $1");
        sqlx::query_as::<_, AudienceType>(&query)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Create an audience type.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAudienceType,
    ) -> Result<AudienceType, sqlx::Error> {
        let query = format!(
            "INSERT INTO audience_types (name, profile, created_by)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudienceType>(&query)
            .bind(&input.name)
            .bind(&input.profile)
            .bind(&input.created_by)
            .fetch_one(pool)
            .await
    }

    /// Modify an audience type's fields.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateAudienceType,
    ) -> Result<AudienceType, DbError> {
        let query = format!(
            "UPDATE audience_types SET
                name = COALESCE($2, name),
                profile = COALESCE($3, profile),
                visibility = COALESCE($4, visibility),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, AudienceType>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.profile)
            .bind(&input.visibility)
            .fetch_optional(pool)
            .await?
            .ok_or_else(|| {
                CoreError::NotFound {
                    entity: "AudienceType",
                    id,
                }
                .into()
            })
    }
}
