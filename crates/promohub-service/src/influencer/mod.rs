//! Influencer procedures.

pub mod input;
pub mod service;

pub use input::InfluencerInput;
pub use service::InfluencerService;
