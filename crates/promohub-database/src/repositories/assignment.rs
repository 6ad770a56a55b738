//! Assignment (campaign ↔ influencer) repository implementation.

use sqlx::{PgConnection, PgPool};

use promohub_core::error::{AppError, ErrorKind};
use promohub_core::result::AppResult;
use promohub_core::types::CampaignId;
use promohub_entity::assignment::Assignment;
use promohub_entity::influencer::Influencer;

/// Repository for the `campaign_influencers` join table.
#[derive(Debug, Clone)]
pub struct AssignmentRepository {
    pool: PgPool,
}

impl AssignmentRepository {
    /// Create a new assignment repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert the pair unless it already exists.
    ///
    /// Returns `true` when a row was inserted.
    pub async fn upsert(conn: &mut PgConnection, assignment: Assignment) -> AppResult<bool> {
        let result = sqlx::query(
            "INSERT INTO campaign_influencers (campaign_id, influencer_id) VALUES ($1, $2) \
             ON CONFLICT (campaign_id, influencer_id) DO NOTHING",
        )
        .bind(assignment.campaign_id)
        .bind(assignment.influencer_id)
        .execute(conn)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err)
                if db_err.constraint() == Some("campaign_influencers_influencer_id_fkey") =>
            {
                AppError::not_found(format!("Influencer {} not found", assignment.influencer_id))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to assign influencer", e),
        })?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every assignment of a campaign. Returns the number removed.
    pub async fn delete_for_campaign(
        conn: &mut PgConnection,
        campaign_id: CampaignId,
    ) -> AppResult<u64> {
        let result = sqlx::query("DELETE FROM campaign_influencers WHERE campaign_id = $1")
            .bind(campaign_id)
            .execute(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete assignments", e)
            })?;
        Ok(result.rows_affected())
    }

    /// List the influencers assigned to a campaign, newest first.
    pub async fn find_influencers(&self, campaign_id: CampaignId) -> AppResult<Vec<Influencer>> {
        sqlx::query_as::<_, Influencer>(
            "SELECT i.* FROM influencers i \
             INNER JOIN campaign_influencers ci ON ci.influencer_id = i.id \
             WHERE ci.campaign_id = $1 \
             ORDER BY i.created_at DESC, i.id DESC",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to list assigned influencers", e)
        })
    }

    /// List the raw assignment rows of a campaign.
    pub async fn find_for_campaign(&self, campaign_id: CampaignId) -> AppResult<Vec<Assignment>> {
        sqlx::query_as::<_, Assignment>(
            "SELECT campaign_id, influencer_id FROM campaign_influencers \
             WHERE campaign_id = $1 ORDER BY influencer_id ASC",
        )
        .bind(campaign_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list assignments", e))
    }
}
