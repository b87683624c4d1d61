// ABOUTME: Database connection management for Trygo
// ABOUTME: Builds the shared SQLite pool and runs embedded migrations

use std::path::PathBuf;

use sqlx::migrate::MigrateDatabase;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::{debug, info};

use crate::error::{StorageError, StorageResult};

/// Storage configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub database_path: PathBuf,
    pub enable_wal: bool,
    pub max_connections: u32,
    pub busy_timeout_seconds: u64,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: trygo_core::database_file(),
            enable_wal: true,
            max_connections: 10,
            busy_timeout_seconds: 30,
        }
    }
}

/// Create the SQLite pool, creating the database file if missing, and run migrations
pub async fn connect(config: &StorageConfig) -> StorageResult<SqlitePool> {
    // Ensure parent directory exists
    if let Some(parent) = config.database_path.parent() {
        std::fs::create_dir_all(parent).map_err(StorageError::Io)?;
    }

    let database_url = format!("sqlite:{}", config.database_path.display());

    // Create database if it doesn't exist
    if !sqlx::Sqlite::database_exists(&database_url)
        .await
        .map_err(StorageError::Sqlx)?
    {
        debug!("Creating database at: {}", database_url);
        sqlx::Sqlite::create_database(&database_url)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    // Configure connection pool
    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(std::time::Duration::from_secs(config.busy_timeout_seconds))
        .connect(&database_url)
        .await
        .map_err(StorageError::Sqlx)?;

    // Configure SQLite settings (after pool creation, before migrations)
    if config.enable_wal {
        sqlx::query("PRAGMA journal_mode = WAL")
            .execute(&pool)
            .await
            .map_err(StorageError::Sqlx)?;
    }

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&pool)
        .await
        .map_err(StorageError::Sqlx)?;

    info!("Initializing SQLite storage with migrations");
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .map_err(StorageError::Migration)?;

    info!("SQLite storage initialized successfully");
    Ok(pool)
}
