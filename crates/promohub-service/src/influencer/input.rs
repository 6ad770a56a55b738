//! Procedure inputs for influencer operations.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use promohub_core::error::AppError;
use promohub_core::result::AppResult;
use promohub_entity::influencer::CreateInfluencer;

use crate::validation::{validate_engagement_rate, validate_input};

/// Input of `influencer.create`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct InfluencerInput {
    /// Display name.
    #[validate(length(min = 1, max = 256, message = "Name must be 1 to 256 characters"))]
    pub name: String,
    /// Follower count, a non-negative integer.
    #[validate(range(min = 0, max = 2147483647, message = "Follower count must be a non-negative integer"))]
    pub follower_count: i64,
    /// Engagement rate percentage.
    #[validate(custom(function = "validate_engagement_rate"))]
    pub engagement_rate: Decimal,
}

impl InfluencerInput {
    /// Validate and convert into the row payload.
    pub fn into_create(self) -> AppResult<CreateInfluencer> {
        validate_input(&self)?;
        let follower_count = i32::try_from(self.follower_count)
            .map_err(|_| AppError::validation("Follower count is out of range"))?;
        Ok(CreateInfluencer {
            name: self.name,
            follower_count,
            engagement_rate: self.engagement_rate,
        })
    }
}
