// ABOUTME: Shared API response types and error handling
// ABOUTME: Provides consistent response format across all API endpoints

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson},
};
use serde::Serialize;

use trygo_content::PipelineError;
use trygo_storage::StorageError;

/// Newtype carrying pipeline errors out of handlers via `?`
pub struct ApiError(pub PipelineError);

impl From<PipelineError> for ApiError {
    fn from(err: PipelineError) -> Self {
        ApiError(err)
    }
}

impl From<StorageError> for ApiError {
    fn from(err: StorageError) -> Self {
        ApiError(err.into())
    }
}

/// Standard API response wrapper
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: Option<T>,
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        ApiResponse {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: String) -> ApiResponse<()> {
        ApiResponse {
            success: false,
            data: None,
            error: Some(message),
        }
    }
}

/// Convert pipeline errors to HTTP responses
impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match &self.0 {
            PipelineError::Validation(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            PipelineError::NotFound(_) => (StatusCode::NOT_FOUND, self.0.to_string()),
            PipelineError::PublishDateConflict { .. } => {
                (StatusCode::CONFLICT, self.0.to_string())
            }
            PipelineError::Upstream(_) => (StatusCode::BAD_GATEWAY, self.0.to_string()),
            PipelineError::Parse(_) => (StatusCode::UNPROCESSABLE_ENTITY, self.0.to_string()),
            PipelineError::Storage(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Database error".to_string(),
            ),
        };

        (status, ResponseJson(ApiResponse::<()>::error(message))).into_response()
    }
}
