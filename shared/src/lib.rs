//! Shared utilities and common types for the Quill server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Pagination types and the pagination engine
//! - Common type definitions

pub mod config;
pub mod types;

// Re-export commonly used items at crate root
pub use config::{AuthConfig, HashingConfig, JwtConfig};
pub use types::{paginate, PageMeta, PageSlice, PaginatedResponse};
