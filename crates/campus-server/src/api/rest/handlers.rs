//! API endpoint handlers
//!
//! HTTP request handlers for all REST API endpoints.

use super::extractors::{JsonExtractor, PathExtractor, QueryExtractor};
use super::types::*;
use crate::error::ServerError;
use axum::{extract::State, http::StatusCode, Json};
use campus_core::{
    Address, AddressFilter, Course, CourseFilter, Enrollment, EnrollmentFilter, EnrollmentKey,
    EnrollmentUpdate, Person, PersonFilter, Resource, Validator,
};
use campus_repository::Repository;
use chrono::Utc;
use serde_json::Value;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use tracing::{debug, info};
use uuid::Uuid;

/// Validate a create body and store it
async fn create_resource<T: Resource>(
    repo: &dyn Repository<T>,
    body: Value,
) -> Result<(StatusCode, Json<T>), ServerError> {
    let input: T::Create = Validator::lenient().parse(body, T::create_schema())?;
    let record = repo.create(input).await?;
    info!(kind = T::KIND, key = %record.key(), "Created record");
    Ok((StatusCode::CREATED, Json(record)))
}

/// Validate an update body and merge it onto the stored record
async fn update_resource<T: Resource>(
    repo: &dyn Repository<T>,
    key: &T::Key,
    body: Value,
) -> Result<Json<T>, ServerError> {
    let patch: T::Update = Validator::lenient().parse(body, T::update_schema())?;
    let record = repo.update(key, patch).await?;
    info!(kind = T::KIND, key = %key, "Updated record");
    Ok(Json(record))
}

// ============================================================================
// Root and health
// ============================================================================

pub(super) async fn root() -> Json<WelcomeResponse> {
    Json(WelcomeResponse {
        message: "Welcome to the Person/Address API. See /health for service status.".to_string(),
    })
}

/// Health check endpoint
pub(super) async fn health(QueryExtractor(query): QueryExtractor<EchoQuery>) -> Json<HealthResponse> {
    Json(make_health(query.echo, None).await)
}

/// Health check endpoint with a path echo
pub(super) async fn health_with_path(
    PathExtractor(path_echo): PathExtractor<String>,
    QueryExtractor(query): QueryExtractor<EchoQuery>,
) -> Json<HealthResponse> {
    Json(make_health(query.echo, Some(path_echo)).await)
}

pub(super) async fn make_health(echo: Option<String>, path_echo: Option<String>) -> HealthResponse {
    HealthResponse {
        status: 200,
        status_message: "OK".to_string(),
        timestamp: Utc::now().format("%Y-%m-%dT%H:%M:%S%.6fZ").to_string(),
        ip_address: resolve_host_address().await.to_string(),
        echo,
        path_echo,
    }
}

/// Resolve this machine's host name to an IPv4 address, falling back to loopback
async fn resolve_host_address() -> IpAddr {
    let host = gethostname::gethostname().to_string_lossy().into_owned();

    match tokio::net::lookup_host(format!("{}:0", host)).await {
        Ok(addrs) => first_ipv4(addrs),
        Err(e) => {
            debug!("Failed to resolve host '{}': {}", host, e);
            LOOPBACK
        }
    }
}

const LOOPBACK: IpAddr = IpAddr::V4(Ipv4Addr::LOCALHOST);

/// First IPv4 address among resolved socket addresses
pub(super) fn first_ipv4(addrs: impl IntoIterator<Item = SocketAddr>) -> IpAddr {
    addrs
        .into_iter()
        .find(SocketAddr::is_ipv4)
        .map(|addr| addr.ip())
        .unwrap_or(LOOPBACK)
}

// ============================================================================
// Persons
// ============================================================================

pub(super) async fn create_person(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<(StatusCode, Json<Person>), ServerError> {
    create_resource(state.store.persons(), body).await
}

pub(super) async fn list_persons(
    State(state): State<AppState>,
    QueryExtractor(filter): QueryExtractor<PersonFilter>,
) -> Result<Json<Vec<Person>>, ServerError> {
    Ok(Json(state.store.persons().list(&filter).await?))
}

pub(super) async fn get_person(
    State(state): State<AppState>,
    PathExtractor(id): PathExtractor<Uuid>,
) -> Result<Json<Person>, ServerError> {
    Ok(Json(state.store.persons().get(&id).await?))
}

pub(super) async fn update_person(
    State(state): State<AppState>,
    PathExtractor(id): PathExtractor<Uuid>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<Json<Person>, ServerError> {
    update_resource(state.store.persons(), &id, body).await
}

// ============================================================================
// Addresses
// ============================================================================

pub(super) async fn create_address(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<(StatusCode, Json<Address>), ServerError> {
    create_resource(state.store.addresses(), body).await
}

pub(super) async fn list_addresses(
    State(state): State<AppState>,
    QueryExtractor(filter): QueryExtractor<AddressFilter>,
) -> Result<Json<Vec<Address>>, ServerError> {
    Ok(Json(state.store.addresses().list(&filter).await?))
}

pub(super) async fn get_address(
    State(state): State<AppState>,
    PathExtractor(id): PathExtractor<Uuid>,
) -> Result<Json<Address>, ServerError> {
    Ok(Json(state.store.addresses().get(&id).await?))
}

pub(super) async fn update_address(
    State(state): State<AppState>,
    PathExtractor(id): PathExtractor<Uuid>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<Json<Address>, ServerError> {
    update_resource(state.store.addresses(), &id, body).await
}

// ============================================================================
// Courses
// ============================================================================

pub(super) async fn create_course(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<(StatusCode, Json<Course>), ServerError> {
    create_resource(state.store.courses(), body).await
}

pub(super) async fn list_courses(
    State(state): State<AppState>,
    QueryExtractor(filter): QueryExtractor<CourseFilter>,
) -> Result<Json<Vec<Course>>, ServerError> {
    filter.validate()?;
    Ok(Json(state.store.courses().list(&filter).await?))
}

pub(super) async fn get_course(
    State(state): State<AppState>,
    PathExtractor(code): PathExtractor<String>,
) -> Result<Json<Course>, ServerError> {
    Ok(Json(state.store.courses().get(&code).await?))
}

// ============================================================================
// Enrollments
// ============================================================================

pub(super) async fn create_enrollment(
    State(state): State<AppState>,
    JsonExtractor(body): JsonExtractor<Value>,
) -> Result<(StatusCode, Json<Enrollment>), ServerError> {
    create_resource(state.store.enrollments(), body).await
}

pub(super) async fn list_enrollments(
    State(state): State<AppState>,
    QueryExtractor(filter): QueryExtractor<EnrollmentFilter>,
) -> Result<Json<Vec<Enrollment>>, ServerError> {
    Ok(Json(state.store.enrollments().list(&filter).await?))
}

pub(super) async fn get_enrollment(
    State(state): State<AppState>,
    PathExtractor((uni, course_code, year, term)): PathExtractor<(String, String, i32, String)>,
) -> Result<Json<Enrollment>, ServerError> {
    let key = EnrollmentKey::new(uni, course_code, year, term);
    Ok(Json(state.store.enrollments().get(&key).await?))
}

/// Rewrite the status of an enrollment; nothing else about it can change
pub(super) async fn update_enrollment_status(
    State(state): State<AppState>,
    PathExtractor((uni, course_code, year, term)): PathExtractor<(String, String, i32, String)>,
    QueryExtractor(query): QueryExtractor<StatusQuery>,
) -> Result<Json<Enrollment>, ServerError> {
    let key = EnrollmentKey::new(uni, course_code, year, term);
    let record = state
        .store
        .enrollments()
        .update(&key, EnrollmentUpdate::status(query.status))
        .await?;
    info!(key = %key, status = %record.status, "Updated enrollment status");
    Ok(Json(record))
}
