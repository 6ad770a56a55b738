//! Application configuration schemas.
//!
//! All configuration structs are deserialized from TOML files via the
//! `config` crate. Each sub-module represents a logical configuration
//! section.

pub mod access;
pub mod app;
pub mod auth;
pub mod database;
pub mod logging;

use serde::{Deserialize, Serialize};

pub use self::access::AccessConfig;
pub use self::app::{CorsConfig, ServerConfig};
pub use self::auth::AuthConfig;
pub use self::database::DatabaseConfig;
pub use self::logging::LoggingConfig;

use crate::error::AppError;

/// Environment in which development-only defaults are tolerated.
pub const DEVELOPMENT_ENV: &str = "development";

/// Root application configuration.
///
/// This struct is the top-level deserialization target for the merged
/// TOML configuration files (default.toml + environment overlay).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Database connection settings.
    pub database: DatabaseConfig,
    /// Identity verification settings.
    #[serde(default)]
    pub auth: AuthConfig,
    /// Per-procedure authentication requirements.
    #[serde(default)]
    pub access: AccessConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from TOML files.
    ///
    /// Merges `config/default.toml` with an environment-specific overlay
    /// (`config/{env}.toml`) and environment variables prefixed with
    /// `PROMOHUB_` (for example `PROMOHUB__DATABASE__URL`).
    pub fn load(env: &str) -> Result<Self, AppError> {
        Self::load_from("config", env)
    }

    /// Like [`AppConfig::load`], reading from an arbitrary directory.
    pub fn load_from(dir: &str, env: &str) -> Result<Self, AppError> {
        let config = config::Config::builder()
            .add_source(config::File::with_name(&format!("{dir}/default")).required(false))
            .add_source(config::File::with_name(&format!("{dir}/{env}")).required(false))
            .add_source(
                config::Environment::with_prefix("PROMOHUB")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Refuse settings that are only safe for local development.
    ///
    /// Outside the `development` environment the token signing secret must
    /// be set to something other than the shipped placeholder.
    pub fn ensure_deployable(&self, env: &str) -> Result<(), AppError> {
        if env != DEVELOPMENT_ENV && self.auth.has_placeholder_secret() {
            return Err(AppError::configuration(format!(
                "auth.jwt_secret must be set for the '{env}' environment \
                 (for example via PROMOHUB__AUTH__JWT_SECRET)"
            )));
        }
        Ok(())
    }

    /// Build a configuration around a database URL, with every other
    /// section at its defaults.
    pub fn with_database_url(url: impl Into<String>) -> Self {
        Self {
            server: ServerConfig::default(),
            database: DatabaseConfig::new(url),
            auth: AuthConfig::default(),
            access: AccessConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}
