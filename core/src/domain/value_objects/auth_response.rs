//! Authentication response value object returned after a successful login.

use serde::{Deserialize, Serialize};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::PublicUser;

/// Successful login payload: the public user plus a freshly minted token pair
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Public fields of the authenticated user
    pub user: PublicUser,

    /// JWT access token for API authentication
    pub access_token: String,

    /// JWT refresh token for obtaining new access tokens
    pub refresh_token: String,

    /// Access token expiration time in seconds
    pub expires_in: i64,
}

impl AuthResponse {
    /// Creates an authentication response from a token pair and the user it
    /// was minted for
    pub fn from_token_pair(user: PublicUser, tokens: TokenPair, expires_in: i64) -> Self {
        Self {
            user,
            access_token: tokens.access_token,
            refresh_token: tokens.refresh_token,
            expires_in,
        }
    }
}
