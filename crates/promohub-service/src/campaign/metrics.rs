//! Per-campaign aggregates derived from assigned influencers.
//!
//! Everything here is pure: callers pass the reference date so results are
//! deterministic.

use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use promohub_core::types::{CampaignId, InfluencerId};
use promohub_entity::campaign::{Campaign, CampaignStatus};
use promohub_entity::influencer::Influencer;

/// Estimated reach of one assigned influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfluencerReach {
    /// Influencer ID.
    pub influencer_id: InfluencerId,
    /// Influencer name.
    pub name: String,
    /// Follower count.
    pub follower_count: i32,
    /// Engagement rate percentage.
    pub engagement_rate: Decimal,
    /// `round(follower_count × engagement_rate / 100)`.
    pub estimated_engagements: i64,
}

/// Aggregate view of a campaign and its assigned influencers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampaignMetrics {
    /// Campaign ID.
    pub campaign_id: CampaignId,
    /// Number of assigned influencers.
    pub influencer_count: usize,
    /// Sum of follower counts.
    pub total_followers: i64,
    /// Mean engagement rate, two decimal places; zero with no influencers.
    pub average_engagement_rate: Decimal,
    /// Sum of per-influencer estimated engagements.
    pub estimated_engagements: i64,
    /// Per-influencer breakdown, in assignment listing order.
    pub influencers: Vec<InfluencerReach>,
    /// Length of the campaign in days, both ends inclusive.
    pub duration_days: i64,
    /// Days left until the end date, never negative.
    pub days_remaining: i64,
    /// Status relative to the reference date.
    pub status: CampaignStatus,
}

impl CampaignMetrics {
    /// Compute metrics for `campaign` with `influencers` assigned, as of
    /// `today`.
    pub fn compute(campaign: &Campaign, influencers: &[Influencer], today: NaiveDate) -> Self {
        let reach: Vec<InfluencerReach> = influencers.iter().map(InfluencerReach::of).collect();

        let total_followers = influencers
            .iter()
            .map(|i| i64::from(i.follower_count))
            .sum();
        let estimated_engagements = reach.iter().map(|r| r.estimated_engagements).sum();

        Self {
            campaign_id: campaign.id,
            influencer_count: influencers.len(),
            total_followers,
            average_engagement_rate: mean(influencers.iter().map(|i| i.engagement_rate)),
            estimated_engagements,
            influencers: reach,
            duration_days: duration_days(campaign.start_date, campaign.end_date),
            days_remaining: days_remaining(campaign.end_date, today),
            status: campaign.status_on(today),
        }
    }
}

impl InfluencerReach {
    fn of(influencer: &Influencer) -> Self {
        Self {
            influencer_id: influencer.id,
            name: influencer.name.clone(),
            follower_count: influencer.follower_count,
            engagement_rate: influencer.engagement_rate,
            estimated_engagements: estimated_engagements(
                influencer.follower_count,
                influencer.engagement_rate,
            ),
        }
    }
}

/// `round(followers × rate / 100)`, halves away from zero.
pub fn estimated_engagements(follower_count: i32, engagement_rate: Decimal) -> i64 {
    (Decimal::from(follower_count) * engagement_rate / Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(i64::MAX)
}

/// Inclusive day count of `[start, end]`.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

/// Whole days from `today` until `end`, clamped at zero.
pub fn days_remaining(end: NaiveDate, today: NaiveDate) -> i64 {
    (end - today).num_days().max(0)
}

/// Arithmetic mean rounded to two places; zero for an empty input.
pub fn mean(values: impl Iterator<Item = Decimal>) -> Decimal {
    let (sum, count) = values.fold((Decimal::ZERO, 0u32), |(sum, n), v| (sum + v, n + 1));
    if count == 0 {
        return Decimal::ZERO;
    }
    (sum / Decimal::from(count)).round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}
