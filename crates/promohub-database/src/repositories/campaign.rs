//! Campaign repository implementation.
//!
//! Every query is scoped by owner. A missing row and a row owned by
//! someone else both come back as `None`; callers decide what signal that
//! becomes.

use sqlx::{PgConnection, PgPool};
use tracing::debug;

use promohub_core::error::{AppError, ErrorKind};
use promohub_core::result::AppResult;
use promohub_core::types::{CampaignId, UserId};
use promohub_entity::campaign::{Campaign, CampaignChanges, CreateCampaign};

use crate::transaction::{self, PgTx};

/// Repository for owner-scoped campaign CRUD.
#[derive(Debug, Clone)]
pub struct CampaignRepository {
    pool: PgPool,
}

impl CampaignRepository {
    /// Create a new campaign repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Begin a transaction on this repository's pool.
    pub async fn begin(&self) -> AppResult<PgTx> {
        transaction::begin(&self.pool).await
    }

    /// List all campaigns owned by `owner`, newest first.
    pub async fn list_by_owner(&self, owner: UserId) -> AppResult<Vec<Campaign>> {
        sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns WHERE user_id = $1 ORDER BY created_at DESC, id DESC",
        )
        .bind(owner)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list campaigns", e))
    }

    /// Find a campaign by ID if `owner` owns it.
    pub async fn find_owned(&self, id: CampaignId, owner: UserId) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>("SELECT * FROM campaigns WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(owner)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find campaign", e))
    }

    /// Insert a new campaign.
    pub async fn create(&self, data: &CreateCampaign) -> AppResult<Campaign> {
        let fields = &data.fields;
        let campaign = sqlx::query_as::<_, Campaign>(
            "INSERT INTO campaigns (user_id, title, description, budget, start_date, end_date) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(data.user_id)
        .bind(&fields.title)
        .bind(&fields.description)
        .bind(fields.budget)
        .bind(fields.start_date)
        .bind(fields.end_date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create campaign", e))?;

        debug!(campaign_id = %campaign.id, "Inserted campaign");
        Ok(campaign)
    }

    /// Overwrite the editable fields of a campaign owned by `owner`.
    ///
    /// Returns `None` when no owned row matched.
    pub async fn update_owned(
        &self,
        id: CampaignId,
        owner: UserId,
        changes: &CampaignChanges,
    ) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>(
            "UPDATE campaigns \
             SET title = $3, description = $4, budget = $5, start_date = $6, end_date = $7 \
             WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .bind(&changes.title)
        .bind(&changes.description)
        .bind(changes.budget)
        .bind(changes.start_date)
        .bind(changes.end_date)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update campaign", e))
    }

    /// Lock an owned campaign row for the rest of the transaction.
    pub async fn lock_owned(
        conn: &mut PgConnection,
        id: CampaignId,
        owner: UserId,
    ) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>(
            "SELECT * FROM campaigns WHERE id = $1 AND user_id = $2 FOR UPDATE",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to lock campaign", e))
    }

    /// Delete an owned campaign inside a transaction, returning the row.
    pub async fn delete_owned(
        conn: &mut PgConnection,
        id: CampaignId,
        owner: UserId,
    ) -> AppResult<Option<Campaign>> {
        sqlx::query_as::<_, Campaign>(
            "DELETE FROM campaigns WHERE id = $1 AND user_id = $2 RETURNING *",
        )
        .bind(id)
        .bind(owner)
        .fetch_optional(conn)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete campaign", e))
    }
}
