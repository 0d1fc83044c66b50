//! Mail Service Module
//!
//! Outbound mail provider implementations for delivering verification
//! codes. The core engine only ever observes a boolean delivery signal;
//! provider selection, HTTP plumbing, and the primary-to-backup failover
//! cascade all live here.
//!
//! Providers:
//! - **SendGrid**: production delivery via the SendGrid v3 HTTP API
//! - **Mock**: console/log output for development
//! - **Failover**: wraps a primary and a backup provider

pub mod failover_mail;
pub mod mail_service;
pub mod mock_mail;
pub mod sendgrid;

// Re-export commonly used types
pub use failover_mail::FailoverMailService;
pub use mail_service::{CoreMailServiceAdapter, MailService};
pub use mock_mail::MockMailService;
pub use sendgrid::{SendGridConfig, SendGridMailService};

#[cfg(test)]
mod tests;

use std::time::Duration;

use sc_shared::config::MailConfig;

/// Default time to keep using the backup before retrying the primary
const DEFAULT_FAILOVER_TIMEOUT: Duration = Duration::from_secs(30);

/// Create a mail service from configuration, adapted to the core trait
///
/// Returns `None` when no transport is configured (provider `"none"`); the
/// engine then reports registrations with delivery unconfirmed. With the
/// `"sendgrid"` provider the mock transport rides along as the failover
/// backup, so a provider outage degrades to log-only delivery instead of a
/// hard failure.
pub fn create_mail_service(config: &MailConfig) -> Option<CoreMailServiceAdapter> {
    match config.provider.as_str() {
        "none" => None,
        "sendgrid" => {
            let sendgrid_config = match SendGridConfig::from_mail_config(config) {
                Ok(sendgrid_config) => sendgrid_config,
                Err(e) => {
                    tracing::error!("Failed to configure SendGrid mail service: {}", e);
                    tracing::warn!("Falling back to mock mail service");
                    return Some(CoreMailServiceAdapter::new(Box::new(
                        MockMailService::new(),
                    )));
                }
            };

            let primary = Box::new(SendGridMailService::new(sendgrid_config));
            let backup = Box::new(MockMailService::new());
            let failover =
                FailoverMailService::new(primary, backup, DEFAULT_FAILOVER_TIMEOUT);

            Some(CoreMailServiceAdapter::new(Box::new(failover)))
        }
        "mock" => Some(CoreMailServiceAdapter::new(Box::new(
            MockMailService::new(),
        ))),
        other => {
            tracing::warn!(provider = other, "Unknown mail provider, using mock");
            Some(CoreMailServiceAdapter::new(Box::new(
                MockMailService::new(),
            )))
        }
    }
}
