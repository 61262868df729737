//! Error taxonomies for authentication and token operations.

use thiserror::Error;

/// Externally visible authentication failures.
///
/// Messages are deliberately identical across indistinguishable causes:
/// login never reveals whether the email exists, and refresh never reveals
/// whether a token was malformed, expired, or rotated out.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthError {
    #[error("Email already in use")]
    DuplicateEmail,

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Invalid refresh token")]
    InvalidRefreshToken,

    #[error("Invalid access token")]
    InvalidAccessToken,
}

/// Token-level failures, internal to the service layer.
///
/// The distinction between variants exists for logging; they all collapse
/// into one externally visible unauthorized outcome before leaving the
/// auth service.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token format")]
    InvalidTokenFormat,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}
