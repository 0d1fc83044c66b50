//! Mail service trait and the adapter exposing it to the core engine

use async_trait::async_trait;
use tracing::warn;

use sc_core::services::auth::MailServiceTrait;
use sc_shared::utils::email::mask_email;

use crate::InfrastructureError;

/// Common interface for all outbound mail providers
#[async_trait]
pub trait MailService: Send + Sync {
    /// Deliver a plain-text message
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InfrastructureError>;

    /// Human-readable provider name for logs
    fn provider_name(&self) -> &str;
}

/// Adapter that narrows a provider to the boolean contract the core sees
///
/// Provider errors are logged here and collapse into `false`; the engine
/// never learns why delivery failed, only that it was not confirmed.
pub struct CoreMailServiceAdapter {
    inner: Box<dyn MailService>,
}

impl CoreMailServiceAdapter {
    /// Wrap a provider implementation
    pub fn new(inner: Box<dyn MailService>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl MailServiceTrait for CoreMailServiceAdapter {
    async fn send(&self, to: &str, subject: &str, body: &str) -> bool {
        match self.inner.send_mail(to, subject, body).await {
            Ok(()) => true,
            Err(e) => {
                warn!(
                    to = %mask_email(to),
                    provider = self.inner.provider_name(),
                    error = %e,
                    "Mail delivery failed"
                );
                false
            }
        }
    }
}
