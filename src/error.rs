//! Application error type and its HTTP rendering.
//!
//! Every failure a handler can produce is an [`AppError`]. Client errors carry a
//! fixed, caller-facing message; storage failures are logged and rendered as a
//! generic 500 so driver details never reach the caller.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Error body returned for every JSON error response.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body is missing, unparsable, or lacks a required field.
    #[error("Invalid payload")]
    InvalidPayload,

    /// `long_url` does not satisfy the accepted URL format.
    #[error("Invalid URL format")]
    InvalidUrl,

    /// A mapping with the requested short code already exists.
    #[error("Short code already exists")]
    DuplicateShortCode,

    /// No mapping exists for the requested short code.
    #[error("Mapping not found")]
    NotFound,

    #[error("Database error: {0}")]
    Database(#[source] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidPayload | AppError::InvalidUrl | AppError::DuplicateShortCode => {
                StatusCode::BAD_REQUEST
            }
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Caller-facing message, or `None` when the response has no body.
    pub fn public_message(&self) -> Option<&'static str> {
        match self {
            AppError::InvalidPayload => Some("Invalid payload"),
            AppError::InvalidUrl => Some("Invalid URL format"),
            AppError::DuplicateShortCode => Some("Short code already exists"),
            AppError::NotFound => None,
            AppError::Database(_) | AppError::Internal(_) => Some("Internal server error"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        }

        match self.public_message() {
            Some(error) => (status, Json(ErrorBody { error })).into_response(),
            None => status.into_response(),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::DuplicateShortCode;
        }

        AppError::Database(e)
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(_: validator::ValidationErrors) -> Self {
        AppError::InvalidPayload
    }
}
