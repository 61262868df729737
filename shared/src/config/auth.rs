//! Authentication and authorization configuration

use serde::{Deserialize, Serialize};
use std::env;

/// Access token lifetime when `JWT_ACCESS_EXPIRES_IN` is absent (1 hour)
const DEFAULT_ACCESS_EXPIRY_SECS: i64 = 3_600;

/// Refresh token lifetime when `JWT_REFRESH_EXPIRES_IN` is absent (7 days)
const DEFAULT_REFRESH_EXPIRY_SECS: i64 = 604_800;

/// bcrypt work factor when `BCRYPT_COST` is absent
const DEFAULT_BCRYPT_COST: u32 = 10;

const DEFAULT_SECRET: &str = "dev-secret-change-in-production";
const DEFAULT_REFRESH_SECRET: &str = "dev-refresh-secret-change-in-production";

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JwtConfig {
    /// Secret key for signing access tokens
    pub secret: String,

    /// Secret key for signing refresh tokens. Kept distinct from `secret`
    /// so a compromise of one token class cannot mint the other.
    pub refresh_secret: String,

    /// Access token expiry time in seconds
    pub access_token_expiry: i64,

    /// Refresh token expiry time in seconds
    pub refresh_token_expiry: i64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            secret: String::from(DEFAULT_SECRET),
            refresh_secret: String::from(DEFAULT_REFRESH_SECRET),
            access_token_expiry: DEFAULT_ACCESS_EXPIRY_SECS,
            refresh_token_expiry: DEFAULT_REFRESH_EXPIRY_SECS,
        }
    }
}

impl JwtConfig {
    /// Create a new JWT configuration with explicit secrets
    pub fn new(secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            refresh_secret: refresh_secret.into(),
            ..Default::default()
        }
    }

    /// Set access token expiry in seconds
    pub fn with_access_expiry(mut self, seconds: i64) -> Self {
        self.access_token_expiry = seconds;
        self
    }

    /// Set refresh token expiry in days
    pub fn with_refresh_expiry_days(mut self, days: i64) -> Self {
        self.refresh_token_expiry = days * 86_400;
        self
    }

    /// Check if using a default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret == DEFAULT_SECRET || self.refresh_secret == DEFAULT_REFRESH_SECRET
    }

    /// Load configuration from environment variables, falling back to
    /// defaults for anything absent or unparseable.
    ///
    /// Recognized variables: `JWT_SECRET`, `JWT_REFRESH_SECRET`,
    /// `JWT_ACCESS_EXPIRES_IN` (default `1h`), `JWT_REFRESH_EXPIRES_IN`
    /// (default `7d`).
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET").unwrap_or_else(|_| String::from(DEFAULT_SECRET)),
            refresh_secret: env::var("JWT_REFRESH_SECRET")
                .unwrap_or_else(|_| String::from(DEFAULT_REFRESH_SECRET)),
            access_token_expiry: env::var("JWT_ACCESS_EXPIRES_IN")
                .ok()
                .and_then(|v| parse_duration_secs(&v))
                .unwrap_or(DEFAULT_ACCESS_EXPIRY_SECS),
            refresh_token_expiry: env::var("JWT_REFRESH_EXPIRES_IN")
                .ok()
                .and_then(|v| parse_duration_secs(&v))
                .unwrap_or(DEFAULT_REFRESH_EXPIRY_SECS),
        }
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Copy, Deserialize, Serialize)]
pub struct HashingConfig {
    /// bcrypt work factor applied to passwords and refresh-token fingerprints
    pub cost: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl HashingConfig {
    /// Create a hashing configuration with a custom work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Load the work factor from `BCRYPT_COST`, keeping the default when the
    /// variable is absent or outside bcrypt's valid 4..=31 range.
    pub fn from_env() -> Self {
        let cost = env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .filter(|c| (4..=31).contains(c))
            .unwrap_or(DEFAULT_BCRYPT_COST);
        Self { cost }
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AuthConfig {
    /// JWT signing configuration
    pub jwt: JwtConfig,

    /// Credential hashing configuration
    #[serde(default)]
    pub hashing: HashingConfig,
}

impl AuthConfig {
    /// Load the complete authentication configuration from the environment
    pub fn from_env() -> Self {
        Self {
            jwt: JwtConfig::from_env(),
            hashing: HashingConfig::from_env(),
        }
    }
}

/// Parse a duration string into seconds.
///
/// Accepts a bare number of seconds (`"90"`) or a number with an `s`, `m`,
/// `h` or `d` suffix (`"30s"`, `"15m"`, `"1h"`, `"7d"`). Returns `None` for
/// anything else.
pub fn parse_duration_secs(value: &str) -> Option<i64> {
    let value = value.trim();
    let (number, unit) = match value.find(|c: char| !c.is_ascii_digit()) {
        Some(idx) => value.split_at(idx),
        None => (value, ""),
    };

    let n: i64 = number.parse().ok()?;
    let multiplier = match unit {
        "" | "s" => 1,
        "m" => 60,
        "h" => 3_600,
        "d" => 86_400,
        _ => return None,
    };

    Some(n * multiplier)
}
