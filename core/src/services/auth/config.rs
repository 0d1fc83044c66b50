//! Configuration for the identity verification engine

use crate::domain::entities::otp::DEFAULT_OTP_TTL_SECONDS;

/// Configuration for the identity verification engine
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Lifetime of a pending verification code in seconds
    pub otp_ttl_seconds: i64,
    /// Whether credential login requires a verified email address.
    /// Deliberate policy choice; the failure surfaces as the same
    /// invalid-credentials error as a wrong password.
    pub require_verified_login: bool,
}

impl Default for AuthServiceConfig {
    fn default() -> Self {
        Self {
            otp_ttl_seconds: DEFAULT_OTP_TTL_SECONDS,
            require_verified_login: true,
        }
    }
}

impl AuthServiceConfig {
    /// Code lifetime expressed in whole minutes, for user-facing copy
    pub fn otp_ttl_minutes(&self) -> i64 {
        self.otp_ttl_seconds / 60
    }
}
