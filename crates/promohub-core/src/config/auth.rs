//! Identity verification configuration.

use serde::{Deserialize, Serialize};

/// Placeholder secret shipped in the default configuration.
pub const DEFAULT_JWT_SECRET: &str = "CHANGE_ME_IN_PRODUCTION";

/// Settings for verifying access tokens issued by the authentication
/// provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared HMAC secret the provider signs access tokens with (HS256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Expected `aud` claim. `None` disables audience validation.
    #[serde(default = "default_audience")]
    pub jwt_audience: Option<String>,
    /// Expected `iss` claim. `None` disables issuer validation.
    #[serde(default)]
    pub jwt_issuer: Option<String>,
    /// Clock-skew leeway applied to `exp`, in seconds.
    #[serde(default = "default_leeway")]
    pub leeway_seconds: u64,
    /// Cookie consulted when no `Authorization` header is present.
    #[serde(default)]
    pub access_token_cookie: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            jwt_audience: default_audience(),
            jwt_issuer: None,
            leeway_seconds: default_leeway(),
            access_token_cookie: None,
        }
    }
}

impl AuthConfig {
    /// Whether the signing secret is empty or still the shipped placeholder.
    ///
    /// Anyone who knows the placeholder can mint tokens for any user.
    pub fn has_placeholder_secret(&self) -> bool {
        let secret = self.jwt_secret.trim();
        secret.is_empty() || secret == DEFAULT_JWT_SECRET
    }
}

fn default_jwt_secret() -> String {
    DEFAULT_JWT_SECRET.to_string()
}

fn default_audience() -> Option<String> {
    Some("authenticated".to_string())
}

fn default_leeway() -> u64 {
    5
}
