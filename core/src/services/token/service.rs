//! Main token service implementation

use chrono::{DateTime, Duration, TimeZone, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};

use crate::domain::entities::token::{Claims, IssuedToken, JWT_AUDIENCE, JWT_ISSUER};
use crate::domain::entities::user::Role;
use crate::errors::{DomainError, TokenError};

use super::config::TokenServiceConfig;

/// Service for issuing and inspecting signed bearer tokens
///
/// Both issuance paths (post-verification and post-login) go through
/// [`TokenService::issue`], so claims and expiry are computed identically
/// regardless of how the session was established.
pub struct TokenService {
    config: TokenServiceConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    /// Same checks as `validation` but with `exp` ignored, for reading the
    /// expiry out of an already-expired token
    expiry_validation: Validation,
}

impl TokenService {
    /// Creates a new token service from the startup configuration
    pub fn new(config: TokenServiceConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.jwt_secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.jwt_secret.as_bytes());

        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_issuer(&[JWT_ISSUER]);
        validation.set_audience(&[JWT_AUDIENCE]);
        validation.validate_exp = true;
        validation.validate_nbf = true;

        let mut expiry_validation = validation.clone();
        expiry_validation.validate_exp = false;

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
            expiry_validation,
        }
    }

    /// Issues a signed access token for a subject and role
    ///
    /// The returned [`IssuedToken`] carries the same expiry instant that was
    /// embedded in the token payload.
    ///
    /// # Arguments
    ///
    /// * `email` - Subject of the token
    /// * `role` - Role whose capability labels are resolved into the claims
    ///
    /// # Returns
    ///
    /// * `Ok(IssuedToken)` - Signed token plus its expiry
    /// * `Err(DomainError)` - Token generation failed
    pub fn issue(&self, email: &str, role: Role) -> Result<IssuedToken, DomainError> {
        let validity = Duration::seconds(self.config.access_token_expiry_seconds);
        let claims = Claims::new_access_token(email, role, validity);

        let expires_at = claims
            .expires_at()
            .ok_or(DomainError::Token(TokenError::TokenGenerationFailed))?;

        let header = Header::new(Algorithm::HS256);
        let access_token = encode(&header, &claims, &self.encoding_key)
            .map_err(|_| DomainError::Token(TokenError::TokenGenerationFailed))?;

        Ok(IssuedToken {
            access_token,
            expires_at,
        })
    }

    /// Verifies an access token and returns its claims
    ///
    /// Full validation: signature, issuer, audience, `nbf`, and `exp`.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;
        Ok(token_data.claims)
    }

    /// Extracts the expiry instant embedded in a token
    ///
    /// The signature and payload shape are verified; the expiry itself is
    /// not enforced here, so the instant comes back even for a token that
    /// has already lapsed. For any token produced by [`TokenService::issue`]
    /// this reproduces the `expires_at` returned at issuance, to second
    /// precision (the resolution of the `exp` claim).
    pub fn expiry_of(&self, token: &str) -> Result<DateTime<Utc>, DomainError> {
        let token_data = decode::<Claims>(token, &self.decoding_key, &self.expiry_validation)
            .map_err(|_| DomainError::Token(TokenError::InvalidToken))?;

        Utc.timestamp_opt(token_data.claims.exp, 0)
            .single()
            .ok_or(DomainError::Token(TokenError::InvalidToken))
    }
}
