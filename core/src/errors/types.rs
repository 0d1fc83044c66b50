//! Domain-specific error types for authentication and related operations
//!
//! Error messages here are the externally visible surface; they are kept
//! deliberately uniform where distinguishing causes would let a caller
//! probe which accounts exist or which check failed.

use thiserror::Error;

/// Internal reason a one-time passcode check failed
///
/// Never shown to callers; the engine collapses all three into one
/// `InvalidOtp` error and only logs the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum OtpFailure {
    #[error("no pending code")]
    NotFound,

    #[error("code expired")]
    Expired,

    #[error("code mismatch")]
    Mismatch,
}

/// Authentication-related errors
#[derive(Error, Debug)]
pub enum AuthError {
    /// Registration conflict: the address is already claimed and verified
    #[error("Email already in use: {email}")]
    EmailAlreadyRegistered { email: String },

    /// One external error for not-found, expired, and mismatched codes;
    /// the cause field exists for logging only
    #[error("Invalid or expired verification code")]
    InvalidOtp { cause: OtpFailure },

    /// Identity missing where one was required
    #[error("User not found")]
    UserNotFound,

    /// Bad credentials; the same error (and message) covers an unknown
    /// email, a wrong password, and an unverified account
    #[error("Invalid email or password")]
    InvalidCredentials,
}

/// Token-related errors
#[derive(Error, Debug)]
pub enum TokenError {
    /// Signature did not verify or the payload is malformed
    #[error("Invalid token")]
    InvalidToken,

    #[error("Token generation failed")]
    TokenGenerationFailed,
}

/// Input validation errors
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Required field: {field}")]
    RequiredField { field: String },

    #[error("Invalid email address")]
    InvalidEmail,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_otp_message_hides_cause() {
        for cause in [OtpFailure::NotFound, OtpFailure::Expired, OtpFailure::Mismatch] {
            let error = AuthError::InvalidOtp { cause };
            assert_eq!(error.to_string(), "Invalid or expired verification code");
        }
    }

    #[test]
    fn test_invalid_credentials_message() {
        assert_eq!(
            AuthError::InvalidCredentials.to_string(),
            "Invalid email or password"
        );
    }
}
