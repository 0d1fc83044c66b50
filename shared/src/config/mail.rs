//! Outbound mail provider configuration

use serde::{Deserialize, Serialize};

/// Outbound mail configuration
///
/// The mail transport is an optional capability: with provider `"none"` the
/// engine runs without one and registration reports delivery as
/// unconfirmed. Providers are selected by name: `"sendgrid"`, `"mock"`, or
/// `"none"`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MailConfig {
    /// Mail provider ("sendgrid", "mock", "none")
    pub provider: String,

    /// From address for outgoing mail
    pub from_address: String,

    /// SendGrid API key (required when provider is "sendgrid")
    #[serde(default)]
    pub sendgrid_api_key: Option<String>,

    /// Timeout for provider API requests in seconds
    pub request_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: String::from("mock"),
            from_address: String::from("no-reply@snapcloud.io"),
            sendgrid_api_key: None,
            request_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Whether a mail transport is configured at all
    pub fn is_enabled(&self) -> bool {
        self.provider != "none"
    }

    /// Create from environment variables
    ///
    /// Reads `MAIL_PROVIDER`, `MAIL_FROM_ADDRESS`, and the SendGrid key from
    /// `MAIL_SENDGRID_API_KEY` with `SENDGRID_API_KEY` as an accepted
    /// alternate name.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let sendgrid_api_key = std::env::var("MAIL_SENDGRID_API_KEY")
            .or_else(|_| std::env::var("SENDGRID_API_KEY"))
            .ok()
            .filter(|k| !k.is_empty());

        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or(defaults.provider),
            from_address: std::env::var("MAIL_FROM_ADDRESS").unwrap_or(defaults.from_address),
            sendgrid_api_key,
            request_timeout_secs: std::env::var("MAIL_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_timeout_secs),
        }
    }
}
