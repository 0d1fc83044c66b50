//! Email address helpers: validation and masking for logs

use once_cell::sync::Lazy;
use regex::Regex;

/// Pragmatic email shape check: one `@`, non-empty local part, dotted domain.
/// Full RFC 5321 validation is the mail provider's problem, not ours.
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email regex is valid"));

/// Maximum accepted email length (matches the column width in the users table)
pub const MAX_EMAIL_LENGTH: usize = 320;

/// Check whether a string looks like a deliverable email address
pub fn is_valid_email(email: &str) -> bool {
    !email.is_empty() && email.len() <= MAX_EMAIL_LENGTH && EMAIL_RE.is_match(email)
}

/// Mask an email address for logging
///
/// Keeps the first character of the local part and the domain, so log lines
/// stay correlatable without exposing the full address.
pub fn mask_email(email: &str) -> String {
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() => {
            let first = local.chars().next().unwrap_or('*');
            format!("{}***@{}", first, domain)
        }
        _ => "***".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_emails() {
        assert!(is_valid_email("a@x.com"));
        assert!(is_valid_email("first.last@sub.example.org"));
        assert!(is_valid_email("user+tag@example.co"));
    }

    #[test]
    fn test_invalid_emails() {
        assert!(!is_valid_email(""));
        assert!(!is_valid_email("no-at-sign"));
        assert!(!is_valid_email("two@@x.com"));
        assert!(!is_valid_email("spaces in@x.com"));
        assert!(!is_valid_email("missing@tld"));
    }

    #[test]
    fn test_overlong_email_rejected() {
        let local = "a".repeat(MAX_EMAIL_LENGTH);
        assert!(!is_valid_email(&format!("{}@x.com", local)));
    }

    #[test]
    fn test_mask_email() {
        assert_eq!(mask_email("alice@example.com"), "a***@example.com");
        assert_eq!(mask_email("not-an-email"), "***");
        assert_eq!(mask_email("@example.com"), "***");
    }
}
