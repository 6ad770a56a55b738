//! Response DTOs.

pub mod response;

pub use response::{ApiResponse, HealthResponse, ReadinessResponse};
