//! User entity representing a registered account in the SnapCloud system.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role assigned to an account
///
/// A closed enumeration; the capability labels consumed by the
/// authorization layer are derived from it at token-issuance time via
/// [`Role::authorities`], never assembled from strings elsewhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A regular account holder
    User,
    /// An operator with administrative access
    Admin,
}

impl Role {
    /// Capability labels granted to this role
    pub fn authorities(&self) -> Vec<&'static str> {
        match self {
            Role::User => vec!["account:read", "account:write"],
            Role::Admin => vec!["account:read", "account:write", "admin:manage"],
        }
    }

    /// Stable lowercase name, as carried in token claims
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Role::User
    }
}

/// User entity representing a registered account
///
/// The email address is the lookup key and is treated case-sensitively.
/// `is_verified` flips to true exactly once, when the account owner proves
/// control of the address with a one-time passcode; nothing in this crate
/// flips it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier for the user
    pub id: Uuid,

    /// Email address (unique)
    pub email: String,

    /// Password hash (bcrypt)
    pub password_hash: String,

    /// Role assigned to the account
    pub role: Role,

    /// Whether the email address has been verified
    pub is_verified: bool,

    /// Timestamp when the user was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the user was last updated
    pub updated_at: DateTime<Utc>,

    /// Timestamp of the user's last login
    pub last_login_at: Option<DateTime<Utc>>,
}

impl User {
    /// Creates a new unverified user with the default role
    pub fn new(email: String, password_hash: String) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            email,
            password_hash,
            role: Role::default(),
            is_verified: false,
            created_at: now,
            updated_at: now,
            last_login_at: None,
        }
    }

    /// Marks the user's email address as verified
    pub fn verify(&mut self) {
        self.is_verified = true;
        self.updated_at = Utc::now();
    }

    /// Replaces the stored password hash
    pub fn set_password_hash(&mut self, password_hash: String) {
        self.password_hash = password_hash;
        self.updated_at = Utc::now();
    }

    /// Updates the last login timestamp
    pub fn update_last_login(&mut self) {
        self.last_login_at = Some(Utc::now());
        self.updated_at = Utc::now();
    }

    /// Checks if the user holds the admin role
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
