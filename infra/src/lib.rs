//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the SnapCloud
//! identity services. It provides concrete implementations for the
//! collaborator interfaces the core defines:
//!
//! - **Database**: MySQL user repository using SQLx
//! - **Mail**: outbound mail providers (SendGrid, mock) with a
//!   primary-to-backup failover cascade

use thiserror::Error;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail module - outbound mail providers
pub mod mail;

/// Errors raised by infrastructure services
#[derive(Error, Debug)]
pub enum InfrastructureError {
    /// Database connection or query error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP request error for external services
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Mail provider error
    #[error("Mail service error: {0}")]
    Mail(String),
}
