//! Influencer entity model.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use promohub_core::types::InfluencerId;

/// A marketing partner. Influencers are shared by all users.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Influencer {
    /// Generated influencer identifier.
    pub id: InfluencerId,
    /// Display name.
    pub name: String,
    /// Number of followers.
    pub follower_count: i32,
    /// Engagement rate as a percentage (for example `3.40`).
    pub engagement_rate: Decimal,
    /// When the influencer was created.
    pub created_at: DateTime<Utc>,
}

/// Data required to insert a new influencer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateInfluencer {
    /// Display name.
    pub name: String,
    /// Number of followers.
    pub follower_count: i32,
    /// Engagement rate percentage.
    pub engagement_rate: Decimal,
}
