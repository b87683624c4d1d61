// ABOUTME: Error types for the content pipeline
// ABOUTME: Defines the error taxonomy surfaced by pipeline operations

use thiserror::Error;

use trygo_storage::StorageError;

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Invalid input: {0}")]
    Validation(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Upstream service error: {0}")]
    Upstream(String),

    #[error("Publish date already taken by content item {conflicting_id}")]
    PublishDateConflict { conflicting_id: String },

    #[error("Could not interpret generated content: {0}")]
    Parse(String),

    #[error("Storage error: {0}")]
    Storage(StorageError),
}

impl From<StorageError> for PipelineError {
    fn from(err: StorageError) -> Self {
        match err {
            StorageError::NotFound(what) => PipelineError::NotFound(what),
            StorageError::InvalidInput(what) => PipelineError::Validation(what),
            other => PipelineError::Storage(other),
        }
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
