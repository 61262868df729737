//! Main token service implementation

use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use tracing::debug;

use crate::domain::entities::token::{Claims, TokenPair};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, DomainResult, TokenError};

use super::config::TokenServiceConfig;

/// Service for minting and verifying signed, time-bound tokens.
///
/// Access and refresh tokens carry the same claim shape but are signed
/// with distinct secrets, so one class of token can never stand in for the
/// other.
pub struct TokenService {
    config: TokenServiceConfig,
    access_encoding_key: EncodingKey,
    access_decoding_key: DecodingKey,
    refresh_encoding_key: EncodingKey,
    refresh_decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// Creates a new token service from its configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let access_encoding_key = EncodingKey::from_secret(config.access_secret.as_bytes());
        let access_decoding_key = DecodingKey::from_secret(config.access_secret.as_bytes());
        let refresh_encoding_key = EncodingKey::from_secret(config.refresh_secret.as_bytes());
        let refresh_decoding_key = DecodingKey::from_secret(config.refresh_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = true;

        Self {
            config,
            access_encoding_key,
            access_decoding_key,
            refresh_encoding_key,
            refresh_decoding_key,
            validation,
        }
    }

    /// Access token lifetime in seconds, exposed for response metadata
    pub fn access_expiry_secs(&self) -> i64 {
        self.config.access_token_expiry_secs
    }

    /// Mints a short-lived access token for a subject
    pub fn issue_access(&self, user_id: i64, email: &str, role: Role) -> DomainResult<String> {
        let claims = Claims::new(user_id, email, role, self.config.access_token_expiry_secs);
        self.encode_jwt(&claims, &self.access_encoding_key)
    }

    /// Mints a long-lived refresh token for a subject
    pub fn issue_refresh(&self, user_id: i64, email: &str, role: Role) -> DomainResult<String> {
        let claims = Claims::new(user_id, email, role, self.config.refresh_token_expiry_secs);
        self.encode_jwt(&claims, &self.refresh_encoding_key)
    }

    /// Mints a matching access/refresh token pair for a subject
    pub fn issue_pair(&self, user_id: i64, email: &str, role: Role) -> DomainResult<TokenPair> {
        let access_token = self.issue_access(user_id, email, role)?;
        let refresh_token = self.issue_refresh(user_id, email, role)?;
        Ok(TokenPair::new(access_token, refresh_token))
    }

    /// Verifies an access token and returns its claims
    pub fn verify_access(&self, token: &str) -> DomainResult<Claims> {
        self.decode_jwt(token, &self.access_decoding_key)
    }

    /// Verifies a refresh token and returns its claims.
    ///
    /// Expired and structurally invalid tokens map to distinct
    /// [`TokenError`] variants for logging; callers collapse both into one
    /// unauthorized outcome.
    pub fn verify_refresh(&self, token: &str) -> DomainResult<Claims> {
        self.decode_jwt(token, &self.refresh_decoding_key)
    }

    fn encode_jwt(&self, claims: &Claims, key: &EncodingKey) -> DomainResult<String> {
        let header = Header::new(Algorithm::HS256);
        encode(&header, claims, key).map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))
    }

    fn decode_jwt(&self, token: &str, key: &DecodingKey) -> DomainResult<Claims> {
        let token_data = decode::<Claims>(token, key, &self.validation).map_err(|e| {
            if e.kind() == &jsonwebtoken::errors::ErrorKind::ExpiredSignature {
                debug!("token rejected: expired");
                DomainError::Token(TokenError::TokenExpired)
            } else {
                debug!(error = %e, "token rejected: invalid");
                DomainError::Token(TokenError::InvalidTokenFormat)
            }
        })?;

        Ok(token_data.claims)
    }
}
