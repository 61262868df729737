//! Credential hashing module
//!
//! One salted, cost-tunable algorithm shared by account passwords and
//! refresh-token fingerprints.

mod service;

pub use service::CredentialHasher;
