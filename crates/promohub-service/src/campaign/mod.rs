//! Campaign procedures: owner-scoped CRUD, influencer assignment, metrics.

pub mod input;
pub mod metrics;
pub mod service;

pub use input::{AssignInfluencerInput, CampaignIdInput, CampaignInput, CampaignRefInput, UpdateCampaignInput};
pub use metrics::{CampaignMetrics, InfluencerReach};
pub use service::CampaignService;
