//! User entity representing a registered account in the Quill system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    /// Full administrative access
    Admin,
    /// Regular account
    User,
    /// Content management access
    Manager,
}

impl Role {
    /// Stable wire name of the role
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::User => "USER",
            Role::Manager => "MANAGER",
        }
    }
}

/// User entity as stored by the user store.
///
/// `password_hash` and `hashed_refresh_token` are opaque digests and never
/// leave the core; callers receive a [`PublicUser`] projection instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Store-assigned unique identifier
    pub id: i64,

    /// Email address, unique across users, matched exactly as stored
    pub email: String,

    /// Salted one-way digest of the account password
    pub password_hash: String,

    /// Display name
    pub name: String,

    /// Contact phone number
    pub phone: String,

    /// Postal address
    pub address: Option<String>,

    /// Role of the account
    pub role: Role,

    /// Inactive users are rejected at access-token validation time
    pub is_active: bool,

    /// Whether the email address has been verified (informational)
    pub email_verified: bool,

    /// Digest of the most recently issued refresh token; absent until the
    /// first login. Overwritten on every login and refresh, which is what
    /// invalidates earlier sessions.
    pub hashed_refresh_token: Option<String>,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Materialize a stored record from a creation payload and a
    /// store-assigned identifier.
    pub fn from_new(id: i64, new: NewUser) -> Self {
        let now = Utc::now();
        Self {
            id,
            email: new.email,
            password_hash: new.password_hash,
            name: new.name,
            phone: new.phone,
            address: new.address,
            role: new.role,
            is_active: new.is_active,
            email_verified: new.email_verified,
            hashed_refresh_token: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Overwrite the stored refresh-token digest
    pub fn set_hashed_refresh_token(&mut self, digest: Option<String>) {
        self.hashed_refresh_token = digest;
        self.updated_at = Utc::now();
    }

    /// Project the outward-facing fields, leaving both digests behind
    pub fn to_public(&self) -> PublicUser {
        PublicUser {
            id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            role: self.role,
            is_active: self.is_active,
            email_verified: self.email_verified,
            created_at: self.created_at,
        }
    }
}

/// Creation payload consumed by the user store; the store assigns the id
/// and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
}

/// Outward projection of a user, safe to return to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub phone: String,
    pub address: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
    pub created_at: DateTime<Utc>,
}
