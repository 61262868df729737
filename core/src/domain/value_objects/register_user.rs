//! Registration input value object.

use serde::Deserialize;

use crate::domain::entities::user::Role;

/// Fields required to register a new account.
///
/// The plaintext password only exists for the duration of the registration
/// call; it is hashed before anything is persisted.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterUser {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: Option<String>,
    pub role: Role,
    pub is_active: bool,
    pub email_verified: bool,
    pub password: String,
}
