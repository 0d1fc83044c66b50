//! Tests for the failover cascade

use std::sync::atomic::Ordering;
use std::time::Duration;

use sc_core::services::auth::MailServiceTrait;

use super::FailingMailService;
use crate::mail::mail_service::MailService;
use crate::mail::{CoreMailServiceAdapter, FailoverMailService, MockMailService};

#[tokio::test]
async fn test_failover_to_backup() {
    let primary = Box::new(FailingMailService::new());
    let backup = Box::new(MockMailService::new());
    let failover = FailoverMailService::new(primary, backup, Duration::from_secs(30));

    let result = failover.send_mail("a@x.com", "subject", "body").await;
    assert!(result.is_ok());
}

#[tokio::test]
async fn test_both_providers_failing_is_an_error() {
    let primary = Box::new(FailingMailService::new());
    let backup = Box::new(FailingMailService::new());
    let failover = FailoverMailService::new(primary, backup, Duration::from_secs(30));

    let result = failover.send_mail("a@x.com", "subject", "body").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn test_backup_skips_primary_until_timeout() {
    let primary = FailingMailService::new();
    let attempts = primary.attempt_counter();
    let backup = Box::new(MockMailService::new());
    let failover =
        FailoverMailService::new(Box::new(primary), backup, Duration::from_secs(3600));

    // First send fails over; the second goes straight to the backup because
    // the retry window has not elapsed
    failover.send_mail("a@x.com", "s", "b").await.unwrap();
    failover.send_mail("a@x.com", "s", "b").await.unwrap();

    assert_eq!(attempts.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_adapter_collapses_failure_to_false() {
    let primary = Box::new(FailingMailService::new());
    let backup = Box::new(FailingMailService::new());
    let failover = FailoverMailService::new(primary, backup, Duration::from_secs(30));
    let adapter = CoreMailServiceAdapter::new(Box::new(failover));

    assert!(!adapter.send("a@x.com", "subject", "body").await);
}

#[tokio::test]
async fn test_adapter_reports_success() {
    let adapter = CoreMailServiceAdapter::new(Box::new(MockMailService::new()));
    assert!(adapter.send("a@x.com", "subject", "body").await);
}
