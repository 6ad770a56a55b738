//! Assignment entity model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use promohub_core::types::{CampaignId, InfluencerId};

/// A row of `campaign_influencers`, keyed by the pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, FromRow)]
pub struct Assignment {
    /// The campaign side of the link.
    pub campaign_id: CampaignId,
    /// The influencer side of the link.
    pub influencer_id: InfluencerId,
}

/// Acknowledgement returned by an assignment write.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssignmentAck {
    /// Always `true` when the write went through.
    pub success: bool,
    /// `false` when the pair already existed and nothing was inserted.
    pub created: bool,
}

impl AssignmentAck {
    /// Acknowledge an upsert that inserted `created` rows.
    pub fn new(created: bool) -> Self {
        Self {
            success: true,
            created,
        }
    }
}
