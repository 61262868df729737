//! Configuration for the token service

use quill_shared::config::JwtConfig;

use crate::domain::entities::token::{ACCESS_TOKEN_EXPIRY_SECS, REFRESH_TOKEN_EXPIRY_SECS};

/// Configuration for the token service
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// Secret for signing and verifying access tokens
    pub access_secret: String,

    /// Secret for signing and verifying refresh tokens. Distinct from
    /// `access_secret`: a compromise of one token class cannot mint the
    /// other.
    pub refresh_secret: String,

    /// Access token expiry in seconds
    pub access_token_expiry_secs: i64,

    /// Refresh token expiry in seconds
    pub refresh_token_expiry_secs: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            access_secret: "development-secret-please-change-in-production".to_string(),
            refresh_secret: "development-refresh-secret-please-change-in-production".to_string(),
            access_token_expiry_secs: ACCESS_TOKEN_EXPIRY_SECS,
            refresh_token_expiry_secs: REFRESH_TOKEN_EXPIRY_SECS,
        }
    }
}

impl From<JwtConfig> for TokenServiceConfig {
    fn from(config: JwtConfig) -> Self {
        Self {
            access_secret: config.secret,
            refresh_secret: config.refresh_secret,
            access_token_expiry_secs: config.access_token_expiry,
            refresh_token_expiry_secs: config.refresh_token_expiry,
        }
    }
}
