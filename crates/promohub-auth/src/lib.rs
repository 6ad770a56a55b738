//! # promohub-auth
//!
//! Identity resolution and authorization for PromoHub.
//!
//! ## Modules
//!
//! - `jwt`: access token claims, verification, and development issuance
//! - `identity`: pluggable identity providers and the per-request resolver
//! - `access`: which procedures require an identity
//! - `ownership`: the error signal for owner-scoped lookups

pub mod access;
pub mod identity;
pub mod jwt;
pub mod ownership;

pub use access::{AccessPolicy, Procedure};
pub use identity::{Identity, IdentityProvider, IdentityResolver, JwtIdentityProvider};
pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use ownership::{OwnedAccess, OwnershipPolicy};
