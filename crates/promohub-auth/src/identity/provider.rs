//! Identity providers.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use promohub_core::config::AuthConfig;
use promohub_core::result::AppResult;
use promohub_core::types::UserId;

use crate::jwt::JwtDecoder;

/// A verified caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// The user's stable identifier.
    pub user_id: UserId,
    /// Email address, when the provider supplies one.
    pub email: Option<String>,
    /// Provider role, when the provider supplies one.
    pub role: Option<String>,
}

impl Identity {
    /// An identity carrying only a user ID.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            email: None,
            role: None,
        }
    }
}

/// Verifies a bearer credential and produces the caller's identity.
#[async_trait]
pub trait IdentityProvider: Send + Sync + std::fmt::Debug + 'static {
    /// Verify `token`, returning an `Unauthenticated` error when it is not
    /// acceptable.
    async fn verify(&self, token: &str) -> AppResult<Identity>;
}

/// Identity provider backed by HS256 JWT verification.
#[derive(Debug, Clone)]
pub struct JwtIdentityProvider {
    decoder: JwtDecoder,
}

impl JwtIdentityProvider {
    /// Create a provider from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            decoder: JwtDecoder::new(config),
        }
    }
}

#[async_trait]
impl IdentityProvider for JwtIdentityProvider {
    async fn verify(&self, token: &str) -> AppResult<Identity> {
        let claims = self.decoder.decode(token)?;
        let user_id = claims.user_id()?;
        Ok(Identity {
            user_id,
            email: claims.email,
            role: claims.role,
        })
    }
}
