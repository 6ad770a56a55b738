//! Core type definitions used across the PromoHub workspace.

pub mod date;
pub mod id;

pub use date::{calendar_date, parse_calendar_date};
pub use id::{CampaignId, InfluencerId, UserId};
