//! Embedded schema migrations.

use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::PgPool;
use sqlx::migrate::Migrator;
use tracing::{info, warn};

use frescipe_core::error::{AppError, ErrorKind};

static MIGRATOR: Migrator = sqlx::migrate!("../../migrations");

/// State of one embedded migration.
#[derive(Debug, Clone, Serialize)]
pub struct MigrationStatus {
    /// Migration version.
    pub version: i64,
    /// Migration description.
    pub description: String,
    /// When it was applied, if it was.
    pub applied_at: Option<DateTime<Utc>>,
}

/// Apply every pending migration.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations");

    MIGRATOR.run(pool).await.map_err(|e| {
        AppError::with_source(
            ErrorKind::Database,
            format!("Failed to run migrations: {e}"),
            e,
        )
    })?;

    info!("Database migrations completed");
    Ok(())
}

/// List embedded migrations with their applied time.
pub async fn migration_status(pool: &PgPool) -> Result<Vec<MigrationStatus>, AppError> {
    let applied: Vec<(i64, DateTime<Utc>)> = sqlx::query_as(
        "SELECT version, installed_on FROM _sqlx_migrations WHERE success = TRUE",
    )
    .fetch_all(pool)
    .await
    .unwrap_or_else(|e| {
        warn!(error = %e, "Migration table not readable, assuming none applied");
        Vec::new()
    });

    Ok(MIGRATOR
        .iter()
        .map(|m| MigrationStatus {
            version: m.version,
            description: m.description.to_string(),
            applied_at: applied
                .iter()
                .find(|(version, _)| *version == m.version)
                .map(|(_, at)| *at),
        })
        .collect())
}

/// Drop the fridge schema and re-apply every migration.
pub async fn reset_database(pool: &PgPool) -> Result<(), AppError> {
    warn!("Dropping fridge schema");
    sqlx::query(
        "DROP TABLE IF EXISTS fridge_items, ingredients, _sqlx_migrations CASCADE",
    )
    .execute(pool)
    .await
    .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to drop tables", e))?;

    run_migrations(pool).await
}
