//! API error types with IntoResponse
//!
//! Errors are rendered as HTML error pages with matching status codes.
//! Store failures are logged and shown to the user as a generic message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use linc_core::ValidationError;

use crate::db::DbError;
use crate::views;

/// API error type with automatic HTTP status mapping
#[derive(Debug)]
pub enum ApiError {
    /// Validation failed (400)
    Validation(ValidationError),

    /// Database error (500, logged)
    Database(DbError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Validation(e) => (StatusCode::BAD_REQUEST, e.to_string()),
            Self::Database(e) => {
                // Log the actual error, return generic message
                tracing::error!("Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "An error occurred while processing your request. Please try again.".to_string(),
                )
            }
        };

        (status, views::error_page(status, &message)).into_response()
    }
}

impl From<ValidationError> for ApiError {
    fn from(e: ValidationError) -> Self {
        Self::Validation(e)
    }
}

impl From<DbError> for ApiError {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
