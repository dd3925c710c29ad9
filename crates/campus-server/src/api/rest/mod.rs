//! REST API implementation
//!
//! Modular REST API with clean separation of concerns:
//! - types: Request/response type definitions
//! - extractors: Request extractors that report rejections as `ServerError`
//! - handlers: API endpoint handlers
//! - router: Router creation and configuration
//! - tests: Unit tests for the handler helpers

mod extractors;
mod handlers;
mod router;
pub mod types;

// Re-export public API
pub use extractors::{JsonExtractor, PathExtractor, QueryExtractor};
pub use router::create_router;
pub use types::{AppState, EchoQuery, HealthResponse, StatusQuery, WelcomeResponse};
