//! One-time passcode ledger
//!
//! The single source of truth for "is this verification code still valid".
//! Codes live only in memory; durable state never sees them.

mod store;

pub use store::OtpStore;
