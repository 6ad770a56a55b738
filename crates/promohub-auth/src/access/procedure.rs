//! The named procedures exposed over RPC.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A named request/response operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Procedure {
    /// `campaign.list`
    CampaignList,
    /// `campaign.byId`
    CampaignById,
    /// `campaign.create`
    CampaignCreate,
    /// `campaign.update`
    CampaignUpdate,
    /// `campaign.delete`
    CampaignDelete,
    /// `campaign.assignInfluencer`
    CampaignAssignInfluencer,
    /// `campaign.influencers`
    CampaignInfluencers,
    /// `campaign.metrics`
    CampaignMetrics,
    /// `dashboard.summary`
    DashboardSummary,
    /// `influencer.list`
    InfluencerList,
    /// `influencer.create`
    InfluencerCreate,
}

impl Procedure {
    /// Every procedure, in routing order.
    pub const ALL: [Procedure; 11] = [
        Self::CampaignList,
        Self::CampaignById,
        Self::CampaignCreate,
        Self::CampaignUpdate,
        Self::CampaignDelete,
        Self::CampaignAssignInfluencer,
        Self::CampaignInfluencers,
        Self::CampaignMetrics,
        Self::DashboardSummary,
        Self::InfluencerList,
        Self::InfluencerCreate,
    ];

    /// The wire name used in `/api/rpc/<name>`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::CampaignList => "campaign.list",
            Self::CampaignById => "campaign.byId",
            Self::CampaignCreate => "campaign.create",
            Self::CampaignUpdate => "campaign.update",
            Self::CampaignDelete => "campaign.delete",
            Self::CampaignAssignInfluencer => "campaign.assignInfluencer",
            Self::CampaignInfluencers => "campaign.influencers",
            Self::CampaignMetrics => "campaign.metrics",
            Self::DashboardSummary => "dashboard.summary",
            Self::InfluencerList => "influencer.list",
            Self::InfluencerCreate => "influencer.create",
        }
    }

    /// Whether the procedure writes state (served over POST).
    pub fn is_mutation(&self) -> bool {
        matches!(
            self,
            Self::CampaignCreate
                | Self::CampaignUpdate
                | Self::CampaignDelete
                | Self::CampaignAssignInfluencer
                | Self::InfluencerCreate
        )
    }
}

impl fmt::Display for Procedure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
