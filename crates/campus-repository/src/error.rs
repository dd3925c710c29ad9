//! Error types for the repository layer

use campus_core::ValidationError;
use thiserror::Error;

/// Result type alias for repository operations
pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// Errors that can occur during repository operations
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// No record with this identity
    #[error("{kind} not found: {key}")]
    NotFound { kind: &'static str, key: String },

    /// A record with this identity already exists
    #[error("{kind} already exists: {key}")]
    Conflict { kind: &'static str, key: String },

    /// Record failed schema validation
    #[error("Validation failed: {}", summarize(.0))]
    Validation(Vec<ValidationError>),

    /// Record could not be converted to or from JSON
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl From<Vec<ValidationError>> for RepositoryError {
    fn from(errors: Vec<ValidationError>) -> Self {
        RepositoryError::Validation(errors)
    }
}

fn summarize(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
