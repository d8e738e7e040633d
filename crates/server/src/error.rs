// crates/server/src/error.rs
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use gh_analytics_core::GithubError;
use gh_analytics_db::DbError;
use serde::Serialize;
use thiserror::Error;

use crate::collector::CollectError;

/// Structured JSON error response for API errors
#[derive(Debug, Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub struct ErrorResponse {
    pub error: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: None,
        }
    }

    pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            details: Some(details.into()),
        }
    }
}

/// API error types that map to HTTP status codes
#[derive(Debug, Error)]
pub enum ApiError {
    /// No session cookie, or the session never saved a token.
    #[error("Save a token first")]
    MissingToken,

    #[error("GitHub error: {0}")]
    Github(#[from] GithubError),

    #[error("Database error: {0}")]
    Database(#[from] DbError),

    #[error("Bad request: {0}")]
    BadRequest(String),
}

impl From<CollectError> for ApiError {
    fn from(err: CollectError) -> Self {
        match err {
            CollectError::Fetch(e) => ApiError::Github(e),
            CollectError::Store(e) => ApiError::Database(e),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            ApiError::MissingToken => {
                tracing::warn!("Request without a saved token");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Save a token first"),
                )
            }
            ApiError::Github(github_err) => {
                match github_err {
                    GithubError::Api { status } => {
                        tracing::warn!(status = %status, "GitHub API rejected request");
                    }
                    GithubError::Transport(message) => {
                        tracing::warn!(error = %message, "GitHub request failed");
                    }
                }
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("GitHub request failed", github_err.to_string()),
                )
            }
            ApiError::Database(db_err) => {
                tracing::error!(error = %db_err, "Database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::with_details("Database error", db_err.to_string()),
                )
            }
            ApiError::BadRequest(msg) => {
                tracing::warn!(message = %msg, "Bad request");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_details("Bad request", msg.clone()),
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;
