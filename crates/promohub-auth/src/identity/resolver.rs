//! Per-request identity resolution.

use std::sync::Arc;

use tracing::debug;

use super::provider::{Identity, IdentityProvider};

/// Turns an optional bearer credential into an optional identity.
///
/// Verification failures are not errors at this layer: they degrade to
/// "no identity", and procedures that need one reject the call themselves.
#[derive(Debug, Clone)]
pub struct IdentityResolver {
    provider: Arc<dyn IdentityProvider>,
}

impl IdentityResolver {
    /// Create a resolver around `provider`.
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the caller from `token`, if any.
    pub async fn resolve(&self, token: Option<&str>) -> Option<Identity> {
        let token = token.map(str::trim).filter(|t| !t.is_empty())?;

        match self.provider.verify(token).await {
            Ok(identity) => {
                debug!(user_id = %identity.user_id, "Resolved caller identity");
                Some(identity)
            }
            Err(e) => {
                debug!(error = %e, "Credential rejected, continuing without identity");
                None
            }
        }
    }
}
