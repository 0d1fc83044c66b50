//! Collaborator traits for the identity verification engine

use async_trait::async_trait;

/// Trait for outbound mail delivery
///
/// The engine observes only a success/failure signal; provider selection,
/// retries, and failover live behind the implementation. Delivery failure
/// is never an error for the engine, only a softer status.
#[async_trait]
pub trait MailServiceTrait: Send + Sync {
    /// Deliver a message, returning whether delivery was accepted
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool;
}
