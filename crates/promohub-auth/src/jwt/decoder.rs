//! JWT access token verification.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use promohub_core::config::AuthConfig;
use promohub_core::error::AppError;

use super::claims::Claims;

/// Verifies HS256 access tokens signed with the provider's shared secret.
#[derive(Clone)]
pub struct JwtDecoder {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for JwtDecoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JwtDecoder")
            .field("validation", &self.validation)
            .finish()
    }
}

impl JwtDecoder {
    /// Creates a new decoder from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;
        validation.leeway = config.leeway_seconds;

        match &config.jwt_audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }
        if let Some(issuer) = &config.jwt_issuer {
            validation.set_issuer(&[issuer]);
        }

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates an access token string.
    ///
    /// Checks signature, expiration, and audience/issuer when configured.
    pub fn decode(&self, token: &str) -> Result<Claims, AppError> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::unauthenticated("Token has expired")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidToken => {
                        AppError::unauthenticated("Invalid token format")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                        AppError::unauthenticated("Invalid token signature")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidAudience => {
                        AppError::unauthenticated("Token audience mismatch")
                    }
                    jsonwebtoken::errors::ErrorKind::InvalidIssuer => {
                        AppError::unauthenticated("Token issuer mismatch")
                    }
                    _ => AppError::unauthenticated(format!("Token validation failed: {e}")),
                }
            })?;

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::JwtEncoder;
    use promohub_core::error::ErrorKind;
    use promohub_core::types::UserId;

    fn config() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".to_string(),
            ..AuthConfig::default()
        }
    }

    #[test]
    fn test_round_trip_with_default_audience() {
        let config = config();
        let user = UserId::new_v4();
        let issued = JwtEncoder::new(&config)
            .issue(user, Some("a@example.com"), 15)
            .expect("issue");

        let claims = JwtDecoder::new(&config).decode(&issued.token).expect("valid");
        assert_eq!(claims.user_id().expect("uuid"), user);
        assert_eq!(claims.email.as_deref(), Some("a@example.com"));
        assert_eq!(claims.aud.as_deref(), Some("authenticated"));
    }

    #[test]
    fn test_wrong_secret_is_rejected() {
        let issued = JwtEncoder::new(&config())
            .issue(UserId::new_v4(), None, 15)
            .expect("issue");

        let other = AuthConfig {
            jwt_secret: "another-secret".to_string(),
            ..AuthConfig::default()
        };
        let err = JwtDecoder::new(&other).decode(&issued.token).expect_err("bad signature");
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let config = AuthConfig {
            leeway_seconds: 0,
            ..config()
        };
        let issued = JwtEncoder::new(&config)
            .issue(UserId::new_v4(), None, -5)
            .expect("issue");

        let err = JwtDecoder::new(&config).decode(&issued.token).expect_err("expired");
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_audience_mismatch_is_rejected() {
        let issuer_side = AuthConfig {
            jwt_audience: Some("someone-else".to_string()),
            ..config()
        };
        let issued = JwtEncoder::new(&issuer_side)
            .issue(UserId::new_v4(), None, 15)
            .expect("issue");

        let err = JwtDecoder::new(&config()).decode(&issued.token).expect_err("audience");
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }

    #[test]
    fn test_audience_not_checked_when_unset() {
        let issuer_side = AuthConfig {
            jwt_audience: Some("someone-else".to_string()),
            ..config()
        };
        let verifier_side = AuthConfig {
            jwt_audience: None,
            ..config()
        };
        let issued = JwtEncoder::new(&issuer_side)
            .issue(UserId::new_v4(), None, 15)
            .expect("issue");

        assert!(JwtDecoder::new(&verifier_side).decode(&issued.token).is_ok());
    }

    #[test]
    fn test_garbage_token_is_rejected() {
        let err = JwtDecoder::new(&config()).decode("not.a.jwt").expect_err("garbage");
        assert_eq!(err.kind, ErrorKind::Unauthenticated);
    }
}
