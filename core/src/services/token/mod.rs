//! Token service module for JWT management
//!
//! This module handles signed, time-bound token issuance and verification:
//! - Access tokens: short-lived, signed with the access secret
//! - Refresh tokens: long-lived, signed with a distinct refresh secret

mod config;
mod service;

#[cfg(test)]
mod tests;

pub use config::TokenServiceConfig;
pub use service::TokenService;
