//! Credential hasher for passwords and refresh-token fingerprints

use std::borrow::Cow;

use sha2::{Digest, Sha256};

use quill_shared::config::HashingConfig;

use crate::errors::{DomainError, DomainResult};

/// bcrypt only reads the first 72 bytes of its input. Longer inputs are
/// pre-digested so two long credentials sharing a prefix (refresh JWTs do)
/// stay distinguishable.
const BCRYPT_INPUT_LIMIT: usize = 72;

/// One-way hasher shared by password storage and refresh-token
/// fingerprints, with a configurable bcrypt work factor.
#[derive(Debug, Clone)]
pub struct CredentialHasher {
    cost: u32,
}

impl CredentialHasher {
    /// Create a hasher with the given bcrypt work factor
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext credential into a salted digest.
    ///
    /// A hashing failure is fatal to the calling operation and surfaces as
    /// an internal error rather than being swallowed.
    pub fn hash(&self, plaintext: &str) -> DomainResult<String> {
        let input = Self::prehash(plaintext);
        bcrypt::hash(input.as_ref(), self.cost).map_err(|e| DomainError::Internal {
            message: format!("credential hashing failed: {e}"),
        })
    }

    /// Verify a plaintext credential against a stored digest.
    ///
    /// Never fails: a malformed digest is treated as non-matching.
    pub fn verify(&self, plaintext: &str, digest: &str) -> bool {
        let input = Self::prehash(plaintext);
        bcrypt::verify(input.as_ref(), digest).unwrap_or(false)
    }

    fn prehash(plaintext: &str) -> Cow<'_, str> {
        if plaintext.len() > BCRYPT_INPUT_LIMIT {
            let mut hasher = Sha256::new();
            hasher.update(plaintext.as_bytes());
            Cow::Owned(format!("{:x}", hasher.finalize()))
        } else {
            Cow::Borrowed(plaintext)
        }
    }
}

impl From<HashingConfig> for CredentialHasher {
    fn from(config: HashingConfig) -> Self {
        Self::new(config.cost)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Minimum bcrypt cost, keeps the tests fast
    const TEST_COST: u32 = 4;

    #[test]
    fn hash_then_verify_round_trips() {
        let hasher = CredentialHasher::new(TEST_COST);
        let digest = hasher.hash("secret123").unwrap();
        assert!(hasher.verify("secret123", &digest));
        assert!(!hasher.verify("secret124", &digest));
    }

    #[test]
    fn digests_are_salted() {
        let hasher = CredentialHasher::new(TEST_COST);
        let a = hasher.hash("secret123").unwrap();
        let b = hasher.hash("secret123").unwrap();
        assert_ne!(a, b);
        assert!(hasher.verify("secret123", &a));
        assert!(hasher.verify("secret123", &b));
    }

    #[test]
    fn malformed_digests_never_match() {
        let hasher = CredentialHasher::new(TEST_COST);
        assert!(!hasher.verify("secret123", "not-a-bcrypt-digest"));
        assert!(!hasher.verify("secret123", ""));
    }

    #[test]
    fn long_inputs_with_a_shared_prefix_stay_distinguishable() {
        let hasher = CredentialHasher::new(TEST_COST);
        let prefix = "x".repeat(100);
        let first = format!("{prefix}-first");
        let second = format!("{prefix}-second");

        let digest = hasher.hash(&first).unwrap();
        assert!(hasher.verify(&first, &digest));
        assert!(!hasher.verify(&second, &digest));
    }

    #[test]
    fn hasher_can_be_built_from_config() {
        let hasher = CredentialHasher::from(HashingConfig::new(TEST_COST));
        let digest = hasher.hash("pw").unwrap();
        assert!(hasher.verify("pw", &digest));
    }
}
