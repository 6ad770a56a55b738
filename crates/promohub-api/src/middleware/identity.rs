//! Identity resolution middleware.
//!
//! Runs once per request: reads the bearer token from the `Authorization`
//! header, falling back to the configured cookie, and stores the result as
//! an [`AuthContext`] extension.

use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::http::header::AUTHORIZATION;
use axum::middleware::Next;
use axum::response::Response;
use axum_extra::extract::CookieJar;

use promohub_auth::Identity;

use crate::state::AppState;

/// The resolved caller of the current request.
#[derive(Debug, Clone, Default)]
pub struct AuthContext {
    /// `None` for anonymous callers.
    pub identity: Option<Identity>,
}

/// Resolve the caller and attach an [`AuthContext`] to the request.
pub async fn resolve_identity(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let token = bearer_token(request.headers()).or_else(|| {
        state
            .config
            .auth
            .access_token_cookie
            .as_deref()
            .and_then(|name| cookie_token(request.headers(), name))
    });

    let identity = state.identity_resolver.resolve(token.as_deref()).await;
    request.extensions_mut().insert(AuthContext { identity });

    next.run(request).await
}

/// Extract the token from `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.split_once(' ')?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return None;
    }
    let token = token.trim();
    (!token.is_empty()).then(|| token.to_string())
}

/// Extract the token from the cookie called `name`.
pub fn cookie_token(headers: &HeaderMap, name: &str) -> Option<String> {
    CookieJar::from_headers(headers)
        .get(name)
        .map(|cookie| cookie.value().to_string())
        .filter(|value| !value.is_empty())
}
