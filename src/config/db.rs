// src/config/db.rs
// DOCUMENTATION: Database connection pool initialization
// PURPOSE: Setup the PostgreSQL pool and create the schema

use crate::config::Config;
use sqlx::migrate::MigrateError;
use sqlx::postgres::{PgPool, PgPoolOptions};
use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbInitError {
    #[error("connection failed: {0}")]
    Connect(#[from] sqlx::Error),

    #[error("schema setup failed: {0}")]
    Migrate(#[from] MigrateError),
}

/// Initialize PostgreSQL connection pool
/// DOCUMENTATION: Called once during application startup in main.rs.
/// Applies the SQL files in migrations/ so both tables exist before serving.
pub async fn init_db_pool(config: &Config) -> Result<PgPool, DbInitError> {
    log::info!("Initializing database pool");

    let pool = PgPoolOptions::new()
        // Maximum concurrent connections
        .max_connections(config.db_max_connections)
        // Timeout waiting for connection from pool
        .acquire_timeout(Duration::from_secs(config.db_connection_timeout))
        // Connection idle timeout (5 minutes)
        .idle_timeout(Duration::from_secs(300))
        // Connection lifetime (30 minutes before recycle)
        .max_lifetime(Duration::from_secs(1800))
        .connect(&config.database_url)
        .await?;

    // Verify connection works
    sqlx::query("SELECT 1").execute(&pool).await?;

    sqlx::migrate!("./migrations").run(&pool).await?;

    log::info!("Database pool initialized and schema is up to date");
    Ok(pool)
}
