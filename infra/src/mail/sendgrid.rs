//! SendGrid Mail Service Implementation
//!
//! Delivers mail through the SendGrid v3 `mail/send` HTTP API. Any 2xx
//! status counts as accepted; everything else, including transport errors,
//! surfaces as a mail error and lets the failover cascade take over.

use async_trait::async_trait;
use serde_json::json;
use std::time::Duration;
use tracing::{debug, info};

use sc_shared::config::MailConfig;
use sc_shared::utils::email::mask_email;

use super::mail_service::MailService;
use crate::InfrastructureError;

const SENDGRID_SEND_URL: &str = "https://api.sendgrid.com/v3/mail/send";

/// SendGrid mail service configuration
#[derive(Debug, Clone)]
pub struct SendGridConfig {
    /// SendGrid API key
    pub api_key: String,
    /// From address for outgoing mail
    pub from_address: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl SendGridConfig {
    /// Extract the SendGrid settings from the shared mail configuration
    pub fn from_mail_config(config: &MailConfig) -> Result<Self, InfrastructureError> {
        let api_key = config
            .sendgrid_api_key
            .clone()
            .filter(|k| !k.is_empty())
            .ok_or_else(|| {
                InfrastructureError::Config(
                    "Mail provider is sendgrid but no API key is configured".to_string(),
                )
            })?;

        if config.from_address.is_empty() {
            return Err(InfrastructureError::Config(
                "Mail from address is not configured".to_string(),
            ));
        }

        Ok(Self {
            api_key,
            from_address: config.from_address.clone(),
            request_timeout_secs: config.request_timeout_secs,
        })
    }
}

/// SendGrid mail service implementation
pub struct SendGridMailService {
    client: reqwest::Client,
    config: SendGridConfig,
}

impl SendGridMailService {
    /// Create a new SendGrid mail service
    pub fn new(config: SendGridConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()
            .unwrap_or_default();

        info!(from = %mask_email(&config.from_address), "SendGrid mail service initialized");

        Self { client, config }
    }
}

#[async_trait]
impl MailService for SendGridMailService {
    async fn send_mail(
        &self,
        to: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), InfrastructureError> {
        let payload = json!({
            "personalizations": [{ "to": [{ "email": to }] }],
            "from": { "email": self.config.from_address },
            "subject": subject,
            "content": [{ "type": "text/plain", "value": body }],
        });

        let response = self
            .client
            .post(SENDGRID_SEND_URL)
            .bearer_auth(&self.config.api_key)
            .json(&payload)
            .send()
            .await?;

        let status = response.status();
        debug!(
            to = %mask_email(to),
            status = status.as_u16(),
            "SendGrid API response"
        );

        if status.is_success() {
            Ok(())
        } else {
            Err(InfrastructureError::Mail(format!(
                "SendGrid rejected the message with status {}",
                status.as_u16()
            )))
        }
    }

    fn provider_name(&self) -> &str {
        "SendGrid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_requires_api_key() {
        let config = MailConfig {
            provider: "sendgrid".to_string(),
            sendgrid_api_key: None,
            ..Default::default()
        };
        assert!(matches!(
            SendGridConfig::from_mail_config(&config),
            Err(InfrastructureError::Config(_))
        ));
    }

    #[test]
    fn test_config_from_mail_config() {
        let config = MailConfig {
            provider: "sendgrid".to_string(),
            sendgrid_api_key: Some("SG.key".to_string()),
            from_address: "no-reply@snapcloud.io".to_string(),
            request_timeout_secs: 10,
        };

        let sendgrid = SendGridConfig::from_mail_config(&config).unwrap();
        assert_eq!(sendgrid.api_key, "SG.key");
        assert_eq!(sendgrid.request_timeout_secs, 10);
    }
}
