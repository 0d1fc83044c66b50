//! Password hashing and verification
//!
//! Thin wrappers over bcrypt. The plaintext never outlives these calls and
//! is never logged; comparison semantics (including timing behavior) are
//! the hash library's.

use crate::errors::{DomainError, DomainResult};

/// Hash a password with bcrypt and a per-call random salt
pub fn hash_password(password: &str) -> DomainResult<String> {
    bcrypt::hash(password, bcrypt::DEFAULT_COST).map_err(|e| DomainError::Internal {
        message: format!("Failed to hash password: {}", e),
    })
}

/// Verify a password against a stored bcrypt hash
///
/// Fails with an internal error only when the stored hash itself is
/// malformed; a wrong password is `Ok(false)`.
pub fn verify_password(password: &str, password_hash: &str) -> DomainResult<bool> {
    bcrypt::verify(password, password_hash).map_err(|e| DomainError::Internal {
        message: format!("Failed to verify password: {}", e),
    })
}
