//! Database access - connection pooling and MySQL repository implementations

use sqlx::mysql::{MySqlPool, MySqlPoolOptions};
use std::time::Duration;

use sc_shared::config::DatabaseConfig;

use crate::InfrastructureError;

pub mod mysql;

pub use mysql::MySqlUserRepository;

/// Create a MySQL connection pool from the shared database configuration
pub async fn create_pool(config: &DatabaseConfig) -> Result<MySqlPool, InfrastructureError> {
    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout))
        .idle_timeout(Duration::from_secs(config.idle_timeout))
        .max_lifetime(Duration::from_secs(config.max_lifetime))
        .connect(&config.url)
        .await?;

    tracing::info!(
        max_connections = config.max_connections,
        "Database connection pool established"
    );

    Ok(pool)
}
