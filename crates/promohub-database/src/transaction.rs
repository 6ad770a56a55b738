//! Scoped transactions for multi-statement writes.
//!
//! A [`PgTx`] that is dropped without [`commit`] is rolled back by sqlx,
//! so returning early with `?` from any step undoes the earlier steps.

use sqlx::{PgPool, Postgres, Transaction};
use tracing::{debug, warn};

use promohub_core::error::{AppError, ErrorKind};
use promohub_core::result::AppResult;

/// An open PostgreSQL transaction.
pub type PgTx = Transaction<'static, Postgres>;

/// Begin a transaction on `pool`.
pub async fn begin(pool: &PgPool) -> AppResult<PgTx> {
    pool.begin()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e))
}

/// Commit `tx`.
pub async fn commit(tx: PgTx) -> AppResult<()> {
    tx.commit()
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e))
}

/// Roll back `tx` explicitly, logging the reason.
///
/// A failed rollback is only logged; the connection discards the open
/// transaction when it returns to the pool.
pub async fn rollback(tx: PgTx, reason: &str) {
    debug!(reason, "Rolling back transaction");
    if let Err(e) = tx.rollback().await {
        warn!(reason, error = %e, "Failed to roll back transaction");
    }
}
