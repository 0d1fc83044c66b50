//! User repository trait defining the interface for identity persistence.
//!
//! The engine reaches durable account state only through this trait; the
//! concrete store (MySQL in `sc_infra`) provides the atomic read-modify-write
//! that serializes identity state transitions.

use async_trait::async_trait;

use crate::domain::entities::user::User;
use crate::errors::DomainError;

/// Repository trait for User entity persistence operations
///
/// Implementations must provide read-your-writes consistency within a
/// single call chain: a `save` followed by `find_by_email` for the same
/// address observes the saved state.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find a user by email address
    ///
    /// The email is matched exactly (case-sensitive), as stored.
    ///
    /// # Returns
    /// * `Ok(Some(User))` - User found
    /// * `Ok(None)` - No user registered under this address
    /// * `Err(DomainError)` - Storage error
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError>;

    /// Insert or update a user (upsert keyed on `id`)
    ///
    /// Returns the persisted form.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Check whether a user exists with the given email address
    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError>;
}
