//! # promohub-core
//!
//! Core crate for PromoHub. Contains configuration schemas, typed
//! identifiers, calendar-date input parsing, and the unified error system.
//!
//! This crate has **no** internal dependencies on other PromoHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
