//! Caller identity resolution.

pub mod provider;
pub mod resolver;

pub use provider::{Identity, IdentityProvider, JwtIdentityProvider};
pub use resolver::IdentityResolver;
