//! Pending one-time passcode entity for email ownership verification.

use chrono::{DateTime, Duration, Utc};
use constant_time_eq::constant_time_eq;
use rand::{rngs::OsRng, RngCore};

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Default lifetime of a pending code (10 minutes)
pub const DEFAULT_OTP_TTL_SECONDS: i64 = 600;

/// A pending one-time passcode awaiting verification
///
/// Held only in the in-memory ledger, never persisted. At most one live
/// entry exists per email address; a new registration replaces any prior
/// one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingOtp {
    /// Email address the code was issued for
    pub email: String,

    /// The 6-digit code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,

    /// Timestamp when the code expires
    pub expires_at: DateTime<Utc>,
}

impl PendingOtp {
    /// Creates a pending entry for the given code with the given lifetime
    pub fn new(email: String, code: String, ttl_seconds: i64) -> Self {
        let now = Utc::now();
        Self {
            email,
            code,
            created_at: now,
            expires_at: now + Duration::seconds(ttl_seconds),
        }
    }

    /// Generates a 6-digit verification code from the OS CSPRNG
    ///
    /// Uniform over `[0, 999999]`, zero-padded. The modulo bias over a full
    /// `u32` is negligible for a 6-digit code.
    pub fn generate_code() -> String {
        let mut bytes = [0u8; 4];
        OsRng.fill_bytes(&mut bytes);
        let num = u32::from_le_bytes(bytes) % 1_000_000;
        format!("{:06}", num)
    }

    /// Checks if the code has expired
    pub fn is_expired(&self) -> bool {
        Utc::now() > self.expires_at
    }

    /// Compares a presented code against the stored one in constant time
    pub fn matches(&self, presented: &str) -> bool {
        if self.code.len() != presented.len() {
            return false;
        }
        constant_time_eq(self.code.as_bytes(), presented.as_bytes())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_code_format() {
        for _ in 0..100 {
            let code = PendingOtp::generate_code();
            assert_eq!(code.len(), CODE_LENGTH);
            assert!(code.chars().all(|c| c.is_ascii_digit()));

            let num: u32 = code.parse().expect("generated code is numeric");
            assert!(num < 1_000_000);
        }
    }

    #[test]
    fn test_code_uniqueness() {
        let codes: Vec<String> = (0..100).map(|_| PendingOtp::generate_code()).collect();

        // Not all identical (collisions across 100 draws are possible,
        // a constant output is not)
        let unique = codes.iter().collect::<std::collections::HashSet<_>>().len();
        assert!(unique > 1);
    }

    #[test]
    fn test_fresh_entry_not_expired() {
        let otp = PendingOtp::new("a@x.com".to_string(), "123456".to_string(), 600);
        assert!(!otp.is_expired());
        assert_eq!(otp.expires_at, otp.created_at + Duration::seconds(600));
    }

    #[test]
    fn test_negative_ttl_is_expired() {
        let otp = PendingOtp::new("a@x.com".to_string(), "123456".to_string(), -1);
        assert!(otp.is_expired());
    }

    #[test]
    fn test_matches() {
        let otp = PendingOtp::new("a@x.com".to_string(), "123456".to_string(), 600);
        assert!(otp.matches("123456"));
        assert!(!otp.matches("654321"));
        assert!(!otp.matches("12345"));
        assert!(!otp.matches(""));
    }
}
