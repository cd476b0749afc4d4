use axum::{
    response::{IntoResponse, Response},
    Json,
    http::StatusCode,
};
use serde::Serialize;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid YouTube URL")]
    InvalidInput,

    #[error("failed to fetch video metadata: {0}")]
    MetadataUnavailable(String),

    #[error("generation request failed: {0}")]
    GenerationFailed(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Callers only ever see the generic message; the cause stays in the log.
        let (status, error_message) = match &self {
            AppError::InvalidInput => {
                (StatusCode::BAD_REQUEST, "Invalid YouTube URL".to_string())
            }
            AppError::MetadataUnavailable(cause) => {
                tracing::error!("metadata lookup failed: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch video details".to_string())
            }
            AppError::GenerationFailed(cause) => {
                tracing::error!("summary generation failed: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize video".to_string())
            }
            AppError::ConfigError(cause) => {
                tracing::error!("configuration error: {cause}");
                (StatusCode::INTERNAL_SERVER_ERROR, "Failed to summarize video".to_string())
            }
        };

        let body = Json(ErrorResponse {
            error: error_message,
        });

        (status, body).into_response()
    }
}

impl From<std::env::VarError> for AppError {
    fn from(err: std::env::VarError) -> Self {
        AppError::ConfigError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
