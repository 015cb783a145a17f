use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Errors surfaced by the ratings resource
#[derive(Debug, Error)]
pub enum RatingError {
    /// Rating not found by id
    #[error("Rating not found")]
    NotFound,

    /// Request failed validation before persistence
    #[error("Validation error: {0}")]
    Validation(String),

    /// Store operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Error response body for API clients
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl IntoResponse for RatingError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            RatingError::NotFound => (
                StatusCode::NOT_FOUND,
                "NOT_FOUND",
                "Rating not found".to_string(),
            ),
            RatingError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg),
            RatingError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An internal error occurred".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            error: error.to_string(),
            message,
        });

        (status, body).into_response()
    }
}
