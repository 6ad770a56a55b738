//! # promohub-service
//!
//! Business logic service layer for PromoHub. Each service validates its
//! input, applies the ownership policy, and orchestrates repositories.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references. The caller's identity is an
//! explicit [`RequestContext`] argument on every owner-scoped operation.

pub mod campaign;
pub mod context;
pub mod dashboard;
pub mod influencer;
pub mod validation;

pub use campaign::{CampaignMetrics, CampaignService};
pub use context::RequestContext;
pub use dashboard::{DashboardService, DashboardSummary};
pub use influencer::InfluencerService;
