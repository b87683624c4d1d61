// ABOUTME: Backlog idea management for the Trygo content pipeline
// ABOUTME: Provides CRUD operations and storage for content ideas

pub mod storage;
pub mod types;

pub use storage::*;
pub use types::*;
