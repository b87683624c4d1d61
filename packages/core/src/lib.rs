// ABOUTME: Core constants and utilities for Trygo
// ABOUTME: Foundational package providing shared functionality across all Trygo packages

pub mod constants;
pub mod utils;

// Re-export constants
pub use constants::{database_file, trygo_dir};

// Re-export utilities
pub use utils::generate_entity_id;
