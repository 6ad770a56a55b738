//! Convenience result type alias for PromoHub.

use crate::error::AppError;

/// A specialized `Result` type for PromoHub operations.
pub type AppResult<T> = Result<T, AppError>;
