//! REST API type definitions
//!
//! Request and response types for the REST API endpoints. Entity bodies are
//! the `campus_core` models themselves.

use campus_repository::CampusStore;
use serde::{Deserialize, Serialize};

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: CampusStore,
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always 200
    pub status: u16,
    pub status_message: String,
    /// ISO-8601 UTC with a `Z` suffix
    pub timestamp: String,
    /// Address the host name resolves to
    pub ip_address: String,
    /// `echo` query parameter, if given
    pub echo: Option<String>,
    /// Path segment after `/health/`, if given
    pub path_echo: Option<String>,
}

/// Query accepted by the health endpoints
#[derive(Debug, Default, Deserialize)]
pub struct EchoQuery {
    pub echo: Option<String>,
}

/// Query carrying the new status of an enrollment
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub status: String,
}

/// Root endpoint response
#[derive(Debug, Serialize, Deserialize)]
pub struct WelcomeResponse {
    pub message: String,
}
