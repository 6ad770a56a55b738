//! Repository implementations for all PromoHub tables.

pub mod assignment;
pub mod campaign;
pub mod influencer;

pub use assignment::AssignmentRepository;
pub use campaign::CampaignRepository;
pub use influencer::InfluencerRepository;
