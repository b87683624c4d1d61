// ABOUTME: SQLite storage layer for Trygo
// ABOUTME: Pool construction, migrations, and the shared StorageError type

pub mod db;
pub mod error;

pub use db::{connect, StorageConfig};
pub use error::{StorageError, StorageResult};
