//! `AuthUser` and `MaybeAuthUser` extractors.
//!
//! Both read the identity the identity middleware stored in the request
//! extensions; neither verifies credentials itself. `AuthUser` asks the
//! access policy about the procedure the router tagged the route with.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use promohub_auth::{Identity, Procedure};
use promohub_core::error::AppError;
use promohub_service::context::RequestContext;

use crate::error::ApiError;
use crate::middleware::identity::AuthContext;
use crate::state::AppState;

fn identity_of(parts: &Parts) -> Option<Identity> {
    parts
        .extensions
        .get::<AuthContext>()
        .and_then(|ctx| ctx.identity.clone())
}

/// Authenticated caller context; rejects with 401 when no identity exists.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let identity = identity_of(parts);
        let identity = match parts.extensions.get::<Procedure>() {
            Some(&procedure) => state.access_policy.require(procedure, identity.as_ref())?,
            None => identity
                .as_ref()
                .ok_or_else(|| AppError::unauthenticated("Authentication required"))?,
        };
        Ok(AuthUser(RequestContext::from_identity(identity)))
    }
}

/// The caller's identity, if any. Never rejects.
#[derive(Debug, Clone, Default)]
pub struct MaybeAuthUser(pub Option<Identity>);

impl MaybeAuthUser {
    /// The resolved identity.
    pub fn identity(&self) -> Option<&Identity> {
        self.0.as_ref()
    }
}

impl FromRequestParts<AppState> for MaybeAuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        Ok(MaybeAuthUser(identity_of(parts)))
    }
}
