//! Dashboard aggregates over the caller's campaigns.

pub mod service;
pub mod summary;

pub use service::DashboardService;
pub use summary::DashboardSummary;
