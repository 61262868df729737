//! Token entities for JWT-based authentication.

use chrono::{Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::Role;

/// Default access token lifetime in seconds (1 hour)
pub const ACCESS_TOKEN_EXPIRY_SECS: i64 = 3_600;

/// Default refresh token lifetime in seconds (7 days)
pub const REFRESH_TOKEN_EXPIRY_SECS: i64 = 604_800;

/// Claims structure for the JWT payload.
///
/// Access and refresh tokens carry the same shape; what separates them is
/// the signing secret and the lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id)
    pub sub: i64,

    /// Email of the subject
    pub email: String,

    /// Role of the subject
    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,
}

impl Claims {
    /// Creates claims for a token expiring `ttl_secs` from now
    pub fn new(sub: i64, email: impl Into<String>, role: Role, ttl_secs: i64) -> Self {
        let now = Utc::now();
        let expiry = now + Duration::seconds(ttl_secs);

        Self {
            sub,
            email: email.into(),
            role,
            iat: now.timestamp(),
            exp: expiry.timestamp(),
        }
    }

    /// Checks whether the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// Pair of signed tokens minted per login or refresh call.
///
/// Neither token is ever persisted in plaintext; only a one-way digest of
/// the refresh token is stored, keyed to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived token presented on API requests
    pub access_token: String,

    /// Long-lived token exchanged for a new pair
    pub refresh_token: String,
}

impl TokenPair {
    /// Creates a new token pair
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}
