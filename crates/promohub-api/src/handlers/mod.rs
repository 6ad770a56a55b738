//! Procedure handlers, grouped by domain.

pub mod campaign;
pub mod dashboard;
pub mod health;
pub mod influencer;

use promohub_core::error::AppError;

use crate::error::ApiError;

/// Fallback for paths that name no procedure.
pub async fn unknown_procedure() -> ApiError {
    AppError::not_found("Unknown procedure").into()
}
