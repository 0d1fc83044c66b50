//! Identity verification engine
//!
//! This module composes the OTP ledger, credential hashing, and token
//! issuance into the three public operations of the identity core:
//! - `register` - create or refresh an unverified account and send a code
//! - `verify_otp` - prove control of the email address, issue a session
//! - `authenticate` - credential login, issue a session

mod config;
mod password;
mod service;
mod traits;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use password::{hash_password, verify_password};
pub use service::AuthService;
pub use traits::MailServiceTrait;
