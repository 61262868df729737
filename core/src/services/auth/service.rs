//! Main authentication service implementation

use std::sync::Arc;

use tracing::{debug, info};

use quill_shared::types::{paginate, PaginatedResponse};

use crate::domain::entities::token::TokenPair;
use crate::domain::entities::user::{NewUser, PublicUser, User};
use crate::domain::value_objects::{AuthResponse, RegisterUser};
use crate::errors::{AuthError, DomainResult};
use crate::repositories::UserRepository;
use crate::services::hash::CredentialHasher;
use crate::services::token::TokenService;

/// Authentication service orchestrating the register/login/refresh flows.
///
/// Every call is a stateless transaction over the user store; no session
/// state is retained between calls. The store's own single-row atomicity is
/// the only synchronization relied upon; overwriting the refresh digest is
/// last-writer-wins.
pub struct AuthService<U>
where
    U: UserRepository,
{
    /// User repository for persistence operations
    user_repository: Arc<U>,
    /// Token service for signed token issuance and verification
    token_service: Arc<TokenService>,
    /// One-way hasher for passwords and refresh-token fingerprints
    credential_hasher: CredentialHasher,
}

impl<U> AuthService<U>
where
    U: UserRepository,
{
    /// Create a new authentication service
    pub fn new(
        user_repository: Arc<U>,
        token_service: Arc<TokenService>,
        credential_hasher: CredentialHasher,
    ) -> Self {
        Self {
            user_repository,
            token_service,
            credential_hasher,
        }
    }

    /// Register a new user.
    ///
    /// Fails with [`AuthError::DuplicateEmail`] when the email is taken.
    /// The returned projection never carries the password digest.
    pub async fn register(&self, request: RegisterUser) -> DomainResult<PublicUser> {
        // Step 1: the email must not belong to an existing account
        if self
            .user_repository
            .find_by_email(&request.email)
            .await?
            .is_some()
        {
            debug!("registration rejected: email already in use");
            return Err(AuthError::DuplicateEmail.into());
        }

        // Step 2: hash the password; a hashing failure aborts the call
        let password_hash = self.credential_hasher.hash(&request.password)?;

        // Step 3: persist with no refresh digest until the first login
        let user = self
            .user_repository
            .create(NewUser {
                email: request.email,
                password_hash,
                name: request.name,
                phone: request.phone,
                address: request.address,
                role: request.role,
                is_active: request.is_active,
                email_verified: request.email_verified,
            })
            .await?;

        info!(user_id = user.id, role = user.role.as_str(), "user registered");
        Ok(user.to_public())
    }

    /// Authenticate with email and password, minting a fresh token pair.
    ///
    /// Unknown email and wrong password are indistinguishable to the
    /// caller. A successful login overwrites the stored refresh digest,
    /// which silently invalidates any earlier session.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResponse> {
        let user = match self.user_repository.find_by_email(email).await? {
            Some(user) => user,
            None => {
                debug!("login rejected: unknown email");
                return Err(AuthError::InvalidCredentials.into());
            }
        };

        if !self
            .credential_hasher
            .verify(password, &user.password_hash)
        {
            debug!(user_id = user.id, "login rejected: password mismatch");
            return Err(AuthError::InvalidCredentials.into());
        }

        let tokens = self
            .token_service
            .issue_pair(user.id, &user.email, user.role)?;
        let user = self.store_refresh_digest(user, &tokens.refresh_token).await?;

        info!(user_id = user.id, "user logged in");
        Ok(AuthResponse::from_token_pair(
            user.to_public(),
            tokens,
            self.token_service.access_expiry_secs(),
        ))
    }

    /// Exchange a valid refresh token for a new token pair, rotating it.
    ///
    /// Every failure (bad signature, expiry, unknown subject, or a token
    /// superseded by a later login/refresh) collapses into
    /// [`AuthError::InvalidRefreshToken`]. Store I/O failures propagate
    /// unchanged.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        // Step 1: signature and expiry, before any store access
        let claims = match self.token_service.verify_refresh(refresh_token) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(reason = %err, "refresh rejected: verification failed");
                return Err(AuthError::InvalidRefreshToken.into());
            }
        };

        // Step 2: the subject must still exist and have an active session
        let user = match self.user_repository.find_by_id(claims.sub).await? {
            Some(user) => user,
            None => {
                debug!(user_id = claims.sub, "refresh rejected: unknown subject");
                return Err(AuthError::InvalidRefreshToken.into());
            }
        };

        let stored_digest = match user.hashed_refresh_token.as_deref() {
            Some(digest) => digest,
            None => {
                debug!(user_id = user.id, "refresh rejected: no session on record");
                return Err(AuthError::InvalidRefreshToken.into());
            }
        };

        // Step 3: a token that verifies by signature may still have been
        // rotated out by a later login or refresh
        if !self.credential_hasher.verify(refresh_token, stored_digest) {
            debug!(user_id = user.id, "refresh rejected: token superseded");
            return Err(AuthError::InvalidRefreshToken.into());
        }

        // Step 4: rotate; the token just used stops working here
        let tokens = self
            .token_service
            .issue_pair(user.id, &user.email, user.role)?;
        let user = self.store_refresh_digest(user, &tokens.refresh_token).await?;

        info!(user_id = user.id, "refresh token rotated");
        Ok(tokens)
    }

    /// Validate an access token and resolve it to its live subject.
    ///
    /// Deleted and deactivated users are rejected here even when the token
    /// itself still verifies.
    pub async fn validate_access_token(&self, token: &str) -> DomainResult<PublicUser> {
        let claims = match self.token_service.verify_access(token) {
            Ok(claims) => claims,
            Err(err) => {
                debug!(reason = %err, "access token rejected");
                return Err(AuthError::InvalidAccessToken.into());
            }
        };

        match self.user_repository.find_by_id(claims.sub).await? {
            Some(user) if user.is_active => Ok(user.to_public()),
            _ => {
                debug!(user_id = claims.sub, "access token subject missing or inactive");
                Err(AuthError::InvalidAccessToken.into())
            }
        }
    }

    /// List users ordered by id descending, one page at a time.
    ///
    /// The page fetch and the total count have no ordering dependency and
    /// are issued concurrently.
    pub async fn list_users(
        &self,
        page: Option<f64>,
        page_size: Option<f64>,
    ) -> DomainResult<PaginatedResponse<PublicUser>> {
        let window = paginate(page, page_size, 0);

        let (users, total_count) = tokio::try_join!(
            self.user_repository.find_page(window.skip, window.take),
            self.user_repository.count(),
        )?;

        let slice = paginate(page, page_size, total_count);
        let data = users.iter().map(User::to_public).collect();
        Ok(PaginatedResponse::new(data, slice, total_count))
    }

    /// Hash a freshly issued refresh token and overwrite the user's stored
    /// digest with it.
    async fn store_refresh_digest(&self, mut user: User, refresh_token: &str) -> DomainResult<User> {
        let digest = self.credential_hasher.hash(refresh_token)?;
        user.set_hashed_refresh_token(Some(digest));
        self.user_repository.update(user).await
    }
}
