//! Mock mail service for development and tests
//!
//! Writes the message to the log instead of delivering it. The body (which
//! carries the verification code) is logged at debug level only, so a
//! production logger at info never records codes.

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::{debug, info};

use sc_shared::utils::email::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

/// Development mail transport; accepts everything and logs it
pub struct MockMailService {
    sent_count: AtomicUsize,
}

impl MockMailService {
    /// Create a new mock mail service
    pub fn new() -> Self {
        Self {
            sent_count: AtomicUsize::new(0),
        }
    }

    /// Number of messages accepted so far
    pub fn sent_count(&self) -> usize {
        self.sent_count.load(Ordering::SeqCst)
    }
}

impl Default for MockMailService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailService for MockMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InfrastructureError> {
        self.sent_count.fetch_add(1, Ordering::SeqCst);
        info!(
            to = %mask_email(to),
            subject = subject,
            "Mock mail accepted"
        );
        debug!(to = %mask_email(to), body = body, "Mock mail body");
        Ok(())
    }

    fn provider_name(&self) -> &str {
        "Mock"
    }
}
