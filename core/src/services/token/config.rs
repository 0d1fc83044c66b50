//! Configuration for the token service

use crate::domain::entities::token::ACCESS_TOKEN_EXPIRY_HOURS;

/// Configuration for the token service
///
/// The secret is handed in once at construction (process startup) and never
/// changes for the process lifetime.
#[derive(Debug, Clone)]
pub struct TokenServiceConfig {
    /// JWT signing secret
    pub jwt_secret: String,
    /// Access token validity window in seconds
    pub access_token_expiry_seconds: i64,
}

impl Default for TokenServiceConfig {
    fn default() -> Self {
        Self {
            jwt_secret: "development-secret-please-change-in-production".to_string(),
            access_token_expiry_seconds: ACCESS_TOKEN_EXPIRY_HOURS * 3600,
        }
    }
}

impl TokenServiceConfig {
    /// Build from the shared JWT configuration loaded at startup
    pub fn from_jwt_config(config: &sc_shared::config::JwtConfig) -> Self {
        Self {
            jwt_secret: config.secret.clone(),
            access_token_expiry_seconds: config.access_token_expiry,
        }
    }
}
