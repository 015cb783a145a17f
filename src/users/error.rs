// User resource error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the user resource
#[derive(Debug, Error)]
pub enum UserError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("User not found")]
    NotFound,

    #[error("Email already exists")]
    EmailTaken,

    #[error("Password hashing error")]
    PasswordHash,

    #[error("Database error: {0}")]
    Database(String),
}

impl IntoResponse for UserError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            UserError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            UserError::NotFound => (StatusCode::NOT_FOUND, "User not found".to_string()),
            UserError::EmailTaken => (StatusCode::CONFLICT, "Email already exists".to_string()),
            UserError::PasswordHash => {
                error!("Password hashing error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
            UserError::Database(msg) => {
                error!("Database error in users: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(json!({
            "error": message,
        }));

        (status, body).into_response()
    }
}
