//! User repository trait defining the interface for user data persistence.
//!
//! The auth core only ever talks to persistence through this trait.
//! Implementations live outside the domain layer and bring their own
//! atomicity guarantees; single-row read-modify-write is assumed to be
//! last-writer-wins.

use async_trait::async_trait;

use crate::domain::entities::user::{NewUser, User};
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations.
///
/// Any error from an implementation is a [`DomainError::Store`]-class
/// failure and is fatal to the request that triggered it.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address. Emails are matched exactly as stored.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user with the given email
    /// * `Err(DomainError)` - Store failure
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Find a user by their unique identifier.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, DomainError>;

    /// Persist a new user.
    ///
    /// # Returns
    /// The created user with its store-assigned id and timestamps.
    async fn create(&self, user: NewUser) -> Result<User, DomainError>;

    /// Overwrite an existing user record.
    async fn update(&self, user: User) -> Result<User, DomainError>;

    /// Fetch one page of users ordered by id descending.
    ///
    /// # Arguments
    /// * `skip` - Number of rows to skip
    /// * `take` - Maximum number of rows to return
    async fn find_page(&self, skip: u64, take: u64) -> Result<Vec<User>, DomainError>;

    /// Count all users.
    async fn count(&self) -> Result<u64, DomainError>;
}
