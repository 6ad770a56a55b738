//! HS256 token issuance.
//!
//! Production tokens come from the identity provider. This encoder mints
//! tokens with the same shape for local development and tests.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};
use serde::{Deserialize, Serialize};

use promohub_core::config::AuthConfig;
use promohub_core::error::AppError;
use promohub_core::types::UserId;

use super::claims::Claims;

/// Role claim stamped on issued tokens.
const DEFAULT_ROLE: &str = "authenticated";

/// Creates signed JWT access tokens.
#[derive(Clone)]
pub struct JwtEncoder {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// Audience stamped on issued tokens.
    audience: Option<String>,
    /// Issuer stamped on issued tokens.
    issuer: Option<String>,
}

impl std::fmt::Debug for JwtEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtEncoder")
            .field("audience", &self.audience)
            .field("issuer", &self.issuer)
            .finish()
    }
}

/// A freshly issued access token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IssuedToken {
    /// The encoded token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl JwtEncoder {
    /// Creates a new encoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            audience: config.jwt_audience.clone(),
            issuer: config.jwt_issuer.clone(),
        }
    }

    /// Issue an access token for `user_id` valid for `ttl_minutes`.
    pub fn issue(
        &self,
        user_id: UserId,
        email: Option<&str>,
        ttl_minutes: i64,
    ) -> Result<IssuedToken, AppError> {
        let now = Utc::now();
        let exp = now + Duration::minutes(ttl_minutes);

        let claims = Claims {
            sub: user_id.to_string(),
            email: email.map(str::to_string),
            role: Some(DEFAULT_ROLE.to_string()),
            aud: self.audience.clone(),
            iss: self.issuer.clone(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode access token: {e}")))?;

        Ok(IssuedToken {
            token,
            expires_at: exp,
        })
    }
}
