//! Influencer repository implementation.

use sqlx::{PgConnection, PgPool};

use promohub_core::error::{AppError, ErrorKind};
use promohub_core::result::AppResult;
use promohub_core::types::InfluencerId;
use promohub_entity::influencer::{CreateInfluencer, Influencer};

/// Repository for the shared influencer table.
#[derive(Debug, Clone)]
pub struct InfluencerRepository {
    pool: PgPool,
}

impl InfluencerRepository {
    /// Create a new influencer repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List every influencer, newest first.
    pub async fn list(&self) -> AppResult<Vec<Influencer>> {
        sqlx::query_as::<_, Influencer>(
            "SELECT * FROM influencers ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list influencers", e))
    }

    /// Check inside a transaction that an influencer exists.
    pub async fn exists(conn: &mut PgConnection, id: InfluencerId) -> AppResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM influencers WHERE id = $1)")
            .bind(id)
            .fetch_one(conn)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to check influencer", e)
            })
    }

    /// Insert a new influencer.
    pub async fn create(&self, data: &CreateInfluencer) -> AppResult<Influencer> {
        sqlx::query_as::<_, Influencer>(
            "INSERT INTO influencers (name, follower_count, engagement_rate) \
             VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(&data.name)
        .bind(data.follower_count)
        .bind(data.engagement_rate)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create influencer", e))
    }
}
