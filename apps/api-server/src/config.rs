//! Application configuration loaded from environment variables.

use std::env;

use thiserror::Error;

use reflex_infra::auth::JwtConfig;

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub token: JwtConfig,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("JWT_KEY is not set; refusing to start without a signing secret")]
    MissingJwtKey,
}

impl AppConfig {
    /// Load configuration from environment variables.
    ///
    /// `JWT_KEY` is mandatory - there is no fallback secret. The value is
    /// handed to the token service and never logged.
    pub fn from_env() -> Result<Self, ConfigError> {
        let secret = env::var("JWT_KEY").map_err(|_| ConfigError::MissingJwtKey)?;

        let mut token = JwtConfig::new(secret);
        if let Some(hours) = env::var("JWT_TTL_HOURS").ok().and_then(|s| s.parse().ok()) {
            token.ttl_hours = hours;
        }

        Ok(Self {
            host: env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            token,
        })
    }
}
