//! Token entities for JWT-based session issuance.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::Role;

/// Access token validity window (4 hours)
pub const ACCESS_TOKEN_EXPIRY_HOURS: i64 = 4;

/// JWT issuer
pub const JWT_ISSUER: &str = "snapcloud";

/// JWT audience
pub const JWT_AUDIENCE: &str = "snapcloud-api";

/// Claims structure for the JWT payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (email address)
    pub sub: String,

    /// Role of the subject
    pub role: Role,

    /// Capability labels resolved from the role at issuance
    pub authorities: Vec<String>,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// Issuer
    pub iss: String,

    /// Audience
    pub aud: String,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl Claims {
    /// Creates new claims for an access token
    ///
    /// `exp` is a pure function of `iat` and the validity window, so the
    /// expiry embedded in the token always reproduces the instant computed
    /// at issuance.
    pub fn new_access_token(email: &str, role: Role, validity: Duration) -> Self {
        let now = Utc::now();
        let expiry = now + validity;

        Self {
            sub: email.to_string(),
            role,
            authorities: role.authorities().iter().map(|a| a.to_string()).collect(),
            iat: now.timestamp(),
            exp: expiry.timestamp(),
            nbf: now.timestamp(),
            iss: JWT_ISSUER.to_string(),
            aud: JWT_AUDIENCE.to_string(),
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Expiration instant carried by the claims
    ///
    /// `exp` is written from a real timestamp at issuance, so it always
    /// converts back; `None` only for a forged out-of-range value.
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }

    /// Checks if the claims have expired
    pub fn is_expired(&self) -> bool {
        Utc::now().timestamp() >= self.exp
    }
}

/// A signed bearer token handed back to the caller, together with the
/// expiry instant used when it was built
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IssuedToken {
    /// Signed JWT
    pub access_token: String,

    /// Expiration instant embedded in the token
    pub expires_at: DateTime<Utc>,
}
