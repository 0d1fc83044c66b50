//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{AuthError, OtpFailure, TokenError, ValidationError};

use sc_shared::errors::{error_codes, ErrorResponse, IntoErrorResponse};
use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Resource not found: {resource}")]
    NotFound { resource: String },

    #[error("Database error: {message}")]
    Database { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    ValidationErr(#[from] ValidationError),
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    /// Stable error code for the transport layer
    pub fn error_code(&self) -> &'static str {
        match self {
            DomainError::NotFound { .. } => error_codes::NOT_FOUND,
            DomainError::Database { .. } => error_codes::DATABASE_ERROR,
            DomainError::Internal { .. } => error_codes::INTERNAL_ERROR,
            DomainError::Auth(AuthError::EmailAlreadyRegistered { .. }) => {
                error_codes::EMAIL_ALREADY_REGISTERED
            }
            DomainError::Auth(AuthError::InvalidOtp { .. }) => error_codes::OTP_INVALID,
            DomainError::Auth(AuthError::UserNotFound) => error_codes::NOT_FOUND,
            DomainError::Auth(AuthError::InvalidCredentials) => error_codes::UNAUTHORIZED,
            DomainError::Token(_) => error_codes::TOKEN_INVALID,
            DomainError::ValidationErr(_) => error_codes::VALIDATION_ERROR,
        }
    }
}

impl IntoErrorResponse for DomainError {
    fn to_error_response(&self) -> ErrorResponse {
        ErrorResponse::new(self.error_code(), self.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        let error: DomainError = AuthError::InvalidCredentials.into();
        assert_eq!(error.error_code(), error_codes::UNAUTHORIZED);

        let error: DomainError = AuthError::InvalidOtp {
            cause: OtpFailure::Expired,
        }
        .into();
        assert_eq!(error.error_code(), error_codes::OTP_INVALID);
    }

    #[test]
    fn test_error_response_conversion() {
        let error: DomainError = TokenError::InvalidToken.into();
        let response = error.to_error_response();

        assert_eq!(response.error, error_codes::TOKEN_INVALID);
        assert_eq!(response.message, "Invalid token");
    }
}
