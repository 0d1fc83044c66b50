//! Tests for the mail service module

mod create_service_tests;
mod failover_tests;
mod mock_mail_tests;

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Provider double that always refuses delivery
pub(super) struct FailingMailService {
    attempts: Arc<AtomicUsize>,
}

impl FailingMailService {
    pub fn new() -> Self {
        Self {
            attempts: Arc::new(AtomicUsize::new(0)),
        }
    }

    /// Handle to the attempt counter, usable after the service is boxed away
    pub fn attempt_counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.attempts)
    }
}

#[async_trait]
impl MailService for FailingMailService {
    async fn send_mail(
        &self,
        _to: &str,
        _subject: &str,
        _body: &str,
    ) -> Result<(), InfrastructureError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(InfrastructureError::Mail("provider is down".to_string()))
    }

    fn provider_name(&self) -> &str {
        "FailingPrimary"
    }
}
