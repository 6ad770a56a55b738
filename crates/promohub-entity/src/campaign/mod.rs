//! Campaign domain entities.

pub mod model;
pub mod status;

pub use model::{Campaign, CampaignChanges, CreateCampaign};
pub use status::CampaignStatus;
