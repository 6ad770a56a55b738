//! # promohub-entity
//!
//! Domain entity models for PromoHub. Every struct in this crate
//! represents a database table row or a payload written to one. Row
//! types derive `sqlx::FromRow` and serialize with their column names.

pub mod assignment;
pub mod campaign;
pub mod influencer;
