//! Demo seed data.
//!
//! Seeding is idempotent by name: an influencer whose name already exists is
//! left untouched, so running the seed twice inserts nothing the second time.

use rust_decimal::Decimal;
use sqlx::PgPool;
use tracing::info;

use promohub_core::error::{AppError, ErrorKind};
use promohub_core::result::AppResult;
use promohub_entity::influencer::CreateInfluencer;

/// The influencers shipped with a fresh install.
pub fn default_influencers() -> Vec<CreateInfluencer> {
    [
        ("gameguru", 120_000, Decimal::new(340, 2)),
        ("techpix", 85_000, Decimal::new(410, 2)),
        ("traveljoy", 54_000, Decimal::new(520, 2)),
    ]
    .into_iter()
    .map(|(name, follower_count, engagement_rate)| CreateInfluencer {
        name: name.to_string(),
        follower_count,
        engagement_rate,
    })
    .collect()
}

/// Insert [`default_influencers`] that are not present yet.
///
/// Returns the number of rows inserted.
pub async fn seed_default_influencers(pool: &PgPool) -> AppResult<u64> {
    let mut inserted = 0;

    for influencer in default_influencers() {
        let result = sqlx::query(
            "INSERT INTO influencers (name, follower_count, engagement_rate) \
             SELECT $1, $2, $3 \
             WHERE NOT EXISTS (SELECT 1 FROM influencers WHERE name = $1)",
        )
        .bind(&influencer.name)
        .bind(influencer.follower_count)
        .bind(influencer.engagement_rate)
        .execute(pool)
        .await
        .map_err(|e| {
            AppError::with_source(
                ErrorKind::Database,
                format!("Failed to seed influencer '{}'", influencer.name),
                e,
            )
        })?;
        inserted += result.rows_affected();
    }

    info!(inserted, "Seeded default influencers");
    Ok(inserted)
}
