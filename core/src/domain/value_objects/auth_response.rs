//! Authentication response value object returned by the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::user::Role;

/// Result of a registration, verification, or login operation
///
/// Registration returns no token (`access_token` is `None` until the email
/// address is verified); verification and login return a signed token
/// together with its expiry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthResponse {
    /// Signed bearer token, absent on plain registration
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_token: Option<String>,

    /// Email address of the account
    pub email: String,

    /// Role of the account
    pub role: Role,

    /// Expiration instant of the token, when one was issued
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expires_at: Option<DateTime<Utc>>,

    /// Human-readable status message
    pub message: String,
}

impl AuthResponse {
    /// Response for a successful token issuance (verification or login)
    pub fn success(
        access_token: String,
        email: String,
        role: Role,
        expires_at: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token: Some(access_token),
            email,
            role,
            expires_at: Some(expires_at),
            message: "Login successful".to_string(),
        }
    }

    /// Response for a registration; carries a status message but no token
    pub fn registered(email: String, role: Role, message: impl Into<String>) -> Self {
        Self {
            access_token: None,
            email,
            role,
            expires_at: None,
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_response_has_no_token() {
        let response =
            AuthResponse::registered("a@x.com".to_string(), Role::User, "Verification code sent");

        assert!(response.access_token.is_none());
        assert!(response.expires_at.is_none());
        assert_eq!(response.message, "Verification code sent");
    }

    #[test]
    fn test_success_response_serialization_skips_absent_fields() {
        let response =
            AuthResponse::registered("a@x.com".to_string(), Role::User, "sent");
        let json = serde_json::to_string(&response).unwrap();

        assert!(!json.contains("access_token"));
        assert!(!json.contains("expires_at"));
    }
}
