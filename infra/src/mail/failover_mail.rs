//! Failover Mail Service Implementation
//!
//! A mail service that automatically fails over from a primary provider to
//! a backup when the primary is unavailable, and periodically retries the
//! primary so it can recover without intervention.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{error, info, warn};

use super::mail_service::MailService;
use crate::InfrastructureError;

/// State tracking for the failover service
#[derive(Debug, Clone, Default)]
struct FailoverState {
    /// Whether we're currently routing through the backup provider
    using_backup: bool,
    /// When the primary provider last failed
    last_primary_failure: Option<Instant>,
    /// Number of consecutive failures on the primary
    primary_failure_count: u32,
}

/// Mail service with automatic failover capability
pub struct FailoverMailService {
    /// Primary mail provider (e.g. SendGrid)
    primary: Box<dyn MailService>,
    /// Backup mail provider
    backup: Box<dyn MailService>,
    /// Failover state
    state: Arc<RwLock<FailoverState>>,
    /// How long to wait before retrying the primary after a failure
    failover_timeout: Duration,
}

impl FailoverMailService {
    /// Create a new failover mail service
    ///
    /// # Arguments
    ///
    /// * `primary` - The primary mail provider
    /// * `backup` - The provider to fail over to
    /// * `failover_timeout` - How long to wait before retrying the primary
    pub fn new(
        primary: Box<dyn MailService>,
        backup: Box<dyn MailService>,
        failover_timeout: Duration,
    ) -> Self {
        info!(
            "Initializing failover mail service with {} (primary) and {} (backup)",
            primary.provider_name(),
            backup.provider_name()
        );

        Self {
            primary,
            backup,
            state: Arc::new(RwLock::new(FailoverState::default())),
            failover_timeout,
        }
    }

    /// Check if we should try the primary provider again
    async fn should_retry_primary(&self) -> bool {
        let state = self.state.read().await;

        if !state.using_backup {
            return true;
        }

        match state.last_primary_failure {
            Some(last_failure) => last_failure.elapsed() > self.failover_timeout,
            None => true,
        }
    }

    /// Record a primary failure and switch to the backup
    async fn record_primary_failure(&self) {
        let mut state = self.state.write().await;

        state.primary_failure_count += 1;
        state.last_primary_failure = Some(Instant::now());

        if !state.using_backup {
            warn!(
                "Primary mail provider ({}) failed, switching to backup ({})",
                self.primary.provider_name(),
                self.backup.provider_name()
            );
            state.using_backup = true;
        }
    }

    /// Record a successful primary operation
    async fn record_primary_success(&self) {
        let mut state = self.state.write().await;

        if state.using_backup {
            info!(
                "Primary mail provider ({}) recovered, switching back from backup",
                self.primary.provider_name()
            );
        }

        state.using_backup = false;
        state.primary_failure_count = 0;
        state.last_primary_failure = None;
    }
}

#[async_trait]
impl MailService for FailoverMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InfrastructureError> {
        if self.should_retry_primary().await {
            match self.primary.send_mail(to, subject, body).await {
                Ok(()) => {
                    self.record_primary_success().await;
                    return Ok(());
                }
                Err(e) => {
                    error!(
                        "Primary mail provider ({}) failed: {}",
                        self.primary.provider_name(),
                        e
                    );
                    self.record_primary_failure().await;
                }
            }
        }

        match self.backup.send_mail(to, subject, body).await {
            Ok(()) => Ok(()),
            Err(e) => {
                error!(
                    "Backup mail provider ({}) also failed: {}",
                    self.backup.provider_name(),
                    e
                );
                Err(InfrastructureError::Mail(format!(
                    "Both mail providers failed. Primary: {}, Backup: {}",
                    self.primary.provider_name(),
                    self.backup.provider_name()
                )))
            }
        }
    }

    fn provider_name(&self) -> &str {
        "Failover"
    }
}
