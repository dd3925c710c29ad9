//! Server error types

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use campus_core::ValidationError;
use campus_repository::RepositoryError;
use serde_json::json;
use std::fmt;

/// Server error type
#[derive(Debug)]
pub enum ServerError {
    /// Payload or parameters failed validation
    Validation(Vec<ValidationError>),

    /// Identity already taken
    Conflict(String),

    /// Unknown identity
    NotFound(String),

    /// Request could not be read (bad JSON, wrong content type)
    InvalidRequest(String),

    /// Internal server error
    InternalError(String),
}

impl ServerError {
    /// HTTP status for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServerError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ServerError::Conflict(_) => StatusCode::BAD_REQUEST,
            ServerError::NotFound(_) => StatusCode::NOT_FOUND,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::Validation(errors) => {
                write!(f, "Validation failed: {} error(s)", errors.len())
            }
            ServerError::Conflict(msg) => write!(f, "Conflict: {}", msg),
            ServerError::NotFound(msg) => write!(f, "Not found: {}", msg),
            ServerError::InvalidRequest(msg) => write!(f, "Invalid request: {}", msg),
            ServerError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ServerError {}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let body = match self {
            ServerError::Validation(errors) => {
                let details: Vec<_> = errors
                    .iter()
                    .map(|e| json!({"field": e.field(), "message": e.to_string()}))
                    .collect();
                json!({
                    "error": "Validation failed",
                    "status": status.as_u16(),
                    "details": details,
                })
            }
            ServerError::Conflict(msg)
            | ServerError::NotFound(msg)
            | ServerError::InvalidRequest(msg)
            | ServerError::InternalError(msg) => json!({
                "error": msg,
                "status": status.as_u16(),
            }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<RepositoryError> for ServerError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { .. } => ServerError::NotFound(err.to_string()),
            RepositoryError::Conflict { .. } => ServerError::Conflict(err.to_string()),
            RepositoryError::Validation(errors) => ServerError::Validation(errors),
            RepositoryError::Serialization(e) => ServerError::InternalError(e.to_string()),
        }
    }
}

impl From<Vec<ValidationError>> for ServerError {
    fn from(errors: Vec<ValidationError>) -> Self {
        ServerError::Validation(errors)
    }
}
