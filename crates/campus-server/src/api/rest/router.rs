//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use super::handlers::*;
use super::types::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use campus_repository::CampusStore;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

/// Create REST API router over the given store
pub fn create_router(store: CampusStore) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/health/:path_echo", get(health_with_path))
        .route("/persons", post(create_person).get(list_persons))
        .route("/persons/:id", get(get_person).patch(update_person))
        .route("/addresses", post(create_address).get(list_addresses))
        .route("/addresses/:id", get(get_address).patch(update_address))
        .route("/courses", post(create_course).get(list_courses))
        .route("/courses/:code", get(get_course))
        .route("/enrollments", post(create_enrollment).get(list_enrollments))
        .route(
            "/enrollments/:uni/:course_code/:year/:term",
            get(get_enrollment).patch(update_enrollment_status),
        )
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
