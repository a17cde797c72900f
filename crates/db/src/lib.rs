//! PostgreSQL persistence for the finlit backend.
//!
//! Models are `FromRow` row structs; repositories are zero-sized structs
//! with async methods taking `&PgPool`. Multi-step operations (reconciling
//! association sets, answer upsert batches, reorder batches) run inside a
//! single transaction and roll back as a whole on the first failure.

use sqlx::postgres::PgPoolOptions;

use finlit_core::error::CoreError;

pub mod models;
pub mod repositories;

pub type DbPool = sqlx::PgPool;

/// Error type for repository operations that mix domain validation with
/// database access. Plain single-query methods return `sqlx::Error`
/// directly; transactional ones return this.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `crates/db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
