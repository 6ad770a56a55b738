//! Database migration runner.

use sqlx::PgPool;
use tracing::{info, warn};

use promohub_core::error::{AppError, ErrorKind};

/// Run all pending database migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), AppError> {
    info!("Running database migrations...");

    sqlx::migrate!("../../migrations")
        .run(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to run migrations: {e}"),
                e,
            )
        })?;

    info!("Database migrations completed successfully");
    Ok(())
}

/// Drop every PromoHub table and the migration ledger.
///
/// Children are dropped before parents so no cascade is needed.
pub async fn drop_all(pool: &PgPool) -> Result<(), AppError> {
    warn!("Dropping all PromoHub tables");

    for table in [
        "campaign_influencers",
        "campaigns",
        "influencers",
        "_sqlx_migrations",
    ] {
        sqlx::query(&format!("DROP TABLE IF EXISTS {table}"))
            .execute(pool)
            .await
            .map_err(|e| {
                AppError::with_source(
                    ErrorKind::Database,
                    format!("Failed to drop table {table}"),
                    e,
                )
            })?;
    }

    Ok(())
}
