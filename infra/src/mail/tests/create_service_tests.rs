//! Tests for the mail service factory

use sc_core::services::auth::MailServiceTrait;
use sc_shared::config::MailConfig;

use crate::mail::create_mail_service;

#[test]
fn test_none_provider_yields_no_service() {
    let config = MailConfig {
        provider: "none".to_string(),
        ..Default::default()
    };
    assert!(create_mail_service(&config).is_none());
}

#[tokio::test]
async fn test_mock_provider_delivers() {
    let config = MailConfig {
        provider: "mock".to_string(),
        ..Default::default()
    };
    let service = create_mail_service(&config).expect("mock provider is configured");

    assert!(service.send("a@x.com", "subject", "body").await);
}

#[test]
fn test_unknown_provider_falls_back_to_mock() {
    let config = MailConfig {
        provider: "carrier-pigeon".to_string(),
        ..Default::default()
    };
    assert!(create_mail_service(&config).is_some());
}

#[test]
fn test_sendgrid_without_key_falls_back_to_mock() {
    let config = MailConfig {
        provider: "sendgrid".to_string(),
        sendgrid_api_key: None,
        ..Default::default()
    };
    // Misconfiguration degrades to the mock transport rather than panicking
    assert!(create_mail_service(&config).is_some());
}

#[test]
fn test_sendgrid_with_key_builds_cascade() {
    let config = MailConfig {
        provider: "sendgrid".to_string(),
        sendgrid_api_key: Some("SG.test-key".to_string()),
        ..Default::default()
    };
    assert!(create_mail_service(&config).is_some());
}
