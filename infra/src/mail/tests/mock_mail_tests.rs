//! Tests for the mock mail service

use crate::mail::mail_service::MailService;
use crate::mail::MockMailService;

#[tokio::test]
async fn test_mock_accepts_everything() {
    let service = MockMailService::new();

    let result = service
        .send_mail("a@x.com", "SnapCloud Verification Code", "code body")
        .await;

    assert!(result.is_ok());
    assert_eq!(service.sent_count(), 1);
}

#[tokio::test]
async fn test_mock_counts_messages() {
    let service = MockMailService::new();

    for _ in 0..3 {
        service.send_mail("a@x.com", "s", "b").await.unwrap();
    }

    assert_eq!(service.sent_count(), 3);
    assert_eq!(service.provider_name(), "Mock");
}
