//! Integration tests for REST API endpoints
//!
//! These tests build the real router over an in-memory store and drive it
//! request by request.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use campus_repository::CampusStore;
use campus_server::api::create_router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_app() -> Router {
    create_router(CampusStore::in_memory())
}

/// Send one request and return the status with the decoded JSON body
async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, json)
}

fn cloud_computing() -> Value {
    json!({
        "code": "COMS W4153",
        "title": "Cloud Computing",
        "instructor": "Donald F. Ferguson",
        "credits": 3,
        "dept_id": "COMS"
    })
}

fn person_body(uni: &str, city: &str) -> Value {
    json!({
        "uni": uni,
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": format!("{}@columbia.edu", uni),
        "addresses": [
            {"street": "116th St", "city": city, "country": "USA"}
        ]
    })
}

// ============================================================================
// Root and health
// ============================================================================

#[tokio::test]
async fn test_root_returns_welcome() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/", None).await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["message"].as_str().unwrap().contains("/health"));
}

#[tokio::test]
async fn test_health_echoes_query() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health?echo=hello", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], 200);
    assert_eq!(body["status_message"], "OK");
    assert_eq!(body["echo"], "hello");
    assert_eq!(body["path_echo"], Value::Null);
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
    assert!(body["ip_address"].is_string());
}

#[tokio::test]
async fn test_health_echoes_path() {
    let app = test_app();
    let (status, body) = send(&app, "GET", "/health/segment?echo=q", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["path_echo"], "segment");
    assert_eq!(body["echo"], "q");
}

// ============================================================================
// Courses
// ============================================================================

#[tokio::test]
async fn test_course_create_get_and_duplicate() {
    let app = test_app();

    let (status, created) = send(&app, "POST", "/courses", Some(cloud_computing())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, cloud_computing());

    let (status, fetched) = send(&app, "GET", "/courses/COMS%20W4153", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let mut duplicate = cloud_computing();
    duplicate["title"] = json!("Something Else");
    let (status, body) = send(&app, "POST", "/courses", Some(duplicate)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["status"], 400);

    // The original record survives the rejected duplicate
    let (_, fetched) = send(&app, "GET", "/courses/COMS%20W4153", None).await;
    assert_eq!(fetched["title"], "Cloud Computing");
}

#[tokio::test]
async fn test_course_credits_out_of_range() {
    let app = test_app();
    let mut course = cloud_computing();
    course["credits"] = json!(7);

    let (status, body) = send(&app, "POST", "/courses", Some(course)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "credits");

    let (status, _) = send(&app, "GET", "/courses/COMS%20W4153", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_course_credits_beyond_i64_report_field() {
    let app = test_app();
    let mut course = cloud_computing();
    course["credits"] = json!(u64::MAX);

    let (status, body) = send(&app, "POST", "/courses", Some(course)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"].as_array().unwrap().len(), 1);
    assert_eq!(body["details"][0]["field"], "credits");
}

#[tokio::test]
async fn test_course_missing_field() {
    let app = test_app();
    let mut course = cloud_computing();
    course.as_object_mut().unwrap().remove("instructor");

    let (status, body) = send(&app, "POST", "/courses", Some(course)).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    let fields: Vec<&str> = body["details"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["field"].as_str())
        .collect();
    assert!(fields.contains(&"instructor"));
}

#[tokio::test]
async fn test_course_list_filters() {
    let app = test_app();
    send(&app, "POST", "/courses", Some(cloud_computing())).await;
    send(
        &app,
        "POST",
        "/courses",
        Some(json!({
            "code": "MATH V1101",
            "title": "Calculus I",
            "instructor": "Someone",
            "credits": 4,
            "dept_id": "MATH"
        })),
    )
    .await;

    let (status, all) = send(&app, "GET", "/courses", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);
    assert_eq!(all[0]["code"], "COMS W4153");

    let (_, math) = send(&app, "GET", "/courses?dept_id=MATH", None).await;
    assert_eq!(math.as_array().unwrap().len(), 1);
    assert_eq!(math[0]["code"], "MATH V1101");

    let (_, heavy) = send(&app, "GET", "/courses?min_credits=4", None).await;
    assert_eq!(heavy.as_array().unwrap().len(), 1);

    let (_, none) = send(&app, "GET", "/courses?dept_id=PHYS", None).await;
    assert_eq!(none, json!([]));
}

#[tokio::test]
async fn test_course_list_rejects_bad_bounds() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/courses?min_credits=-1", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(&app, "GET", "/courses?max_credits=lots", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_course_has_no_patch_route() {
    let app = test_app();
    send(&app, "POST", "/courses", Some(cloud_computing())).await;

    let (status, _) = send(
        &app,
        "PATCH",
        "/courses/COMS%20W4153",
        Some(json!({"credits": 4})),
    )
    .await;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
}

// ============================================================================
// Enrollments
// ============================================================================

#[tokio::test]
async fn test_enrollment_status_update() {
    let app = test_app();
    let enrollment = json!({
        "uni": "abc1234",
        "course_code": "COMS W4153",
        "year": 2025,
        "term": "FALL",
        "status": "enrolled"
    });

    let (status, created) = send(&app, "POST", "/enrollments", Some(enrollment.clone())).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created, enrollment);

    let (status, updated) = send(
        &app,
        "PATCH",
        "/enrollments/abc1234/COMS%20W4153/2025/FALL?status=dropped",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "dropped");
    assert_eq!(updated["uni"], "abc1234");
    assert_eq!(updated["course_code"], "COMS W4153");
    assert_eq!(updated["year"], 2025);
    assert_eq!(updated["term"], "FALL");

    let (_, fetched) = send(&app, "GET", "/enrollments/abc1234/COMS%20W4153/2025/FALL", None).await;
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_enrollment_duplicate_and_missing() {
    let app = test_app();
    let enrollment = json!({
        "uni": "abc1234",
        "course_code": "COMS W4153",
        "year": 2025,
        "term": "FALL",
        "status": "enrolled"
    });
    send(&app, "POST", "/enrollments", Some(enrollment.clone())).await;

    let (status, _) = send(&app, "POST", "/enrollments", Some(enrollment)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send(
        &app,
        "PATCH",
        "/enrollments/abc1234/COMS%20W4153/2026/FALL?status=dropped",
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/enrollments/zz9/COMS%20W4153/2025/FALL", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_enrollment_status_required() {
    let app = test_app();
    let (status, _) = send(&app, "PATCH", "/enrollments/abc1234/X/2025/FALL", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_enrollment_list_filters() {
    let app = test_app();
    for (uni, term) in [("abc1234", "FALL"), ("abc1234", "SPRING"), ("def5678", "FALL")] {
        send(
            &app,
            "POST",
            "/enrollments",
            Some(json!({
                "uni": uni,
                "course_code": "COMS W4153",
                "year": 2025,
                "term": term,
                "status": "enrolled"
            })),
        )
        .await;
    }

    let (_, fall) = send(&app, "GET", "/enrollments?term=FALL", None).await;
    assert_eq!(fall.as_array().unwrap().len(), 2);

    let (_, one) = send(&app, "GET", "/enrollments?uni=abc1234&term=SPRING&year=2025", None).await;
    assert_eq!(one.as_array().unwrap().len(), 1);
    assert_eq!(one[0]["term"], "SPRING");
}

// ============================================================================
// Persons and addresses
// ============================================================================

#[tokio::test]
async fn test_person_create_get_patch() {
    let app = test_app();

    let (status, created) = send(&app, "POST", "/persons", Some(person_body("al2001", "New York"))).await;
    assert_eq!(status, StatusCode::CREATED);
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["addresses"][0]["city"], "New York");

    let (status, fetched) = send(&app, "GET", &format!("/persons/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);

    let (status, updated) = send(
        &app,
        "PATCH",
        &format!("/persons/{}", id),
        Some(json!({"first_name": "Augusta", "id": "00000000-0000-0000-0000-000000000000"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["id"], id.as_str());
    assert_eq!(updated["first_name"], "Augusta");
    assert_eq!(updated["last_name"], "Lovelace");
    assert_eq!(updated["email"], "al2001@columbia.edu");
    assert_eq!(updated["created_at"], created["created_at"]);
}

#[tokio::test]
async fn test_person_patch_rejects_invalid_email() {
    let app = test_app();
    let (_, created) = send(&app, "POST", "/persons", Some(person_body("al2001", "New York"))).await;
    let uri = format!("/persons/{}", created["id"].as_str().unwrap());

    let (status, body) = send(&app, "PATCH", &uri, Some(json!({"email": "not-an-email"}))).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["details"][0]["field"], "email");

    let (_, fetched) = send(&app, "GET", &uri, None).await;
    assert_eq!(fetched["email"], "al2001@columbia.edu");
}

#[tokio::test]
async fn test_person_list_by_city() {
    let app = test_app();
    send(&app, "POST", "/persons", Some(person_body("al2001", "New York"))).await;
    send(&app, "POST", "/persons", Some(person_body("cb2002", "Boston"))).await;

    let (status, all) = send(&app, "GET", "/persons", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(all.as_array().unwrap().len(), 2);

    let (_, boston) = send(&app, "GET", "/persons?city=Boston", None).await;
    assert_eq!(boston.as_array().unwrap().len(), 1);
    assert_eq!(boston[0]["uni"], "cb2002");
}

#[tokio::test]
async fn test_person_unknown_and_bad_ids() {
    let app = test_app();

    let (status, _) = send(&app, "GET", "/persons/6f1c1a3e-6f1c-4c1a-8f1c-1a3e6f1c1a3e", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, "GET", "/persons/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);

    let (status, _) = send(
        &app,
        "PATCH",
        "/persons/6f1c1a3e-6f1c-4c1a-8f1c-1a3e6f1c1a3e",
        Some(json!({"first_name": "X"})),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_address_lifecycle() {
    let app = test_app();
    let (status, created) = send(
        &app,
        "POST",
        "/addresses",
        Some(json!({"street": "1 Main St", "city": "Albany", "country": "USA"})),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["state"], Value::Null);
    let uri = format!("/addresses/{}", created["id"].as_str().unwrap());

    let (status, updated) = send(&app, "PATCH", &uri, Some(json!({"state": "NY"}))).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["state"], "NY");
    assert_eq!(updated["street"], "1 Main St");

    let (_, listed) = send(&app, "GET", "/addresses?state=NY", None).await;
    assert_eq!(listed.as_array().unwrap().len(), 1);
}

// ============================================================================
// Malformed requests
// ============================================================================

#[tokio::test]
async fn test_malformed_json_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/courses")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_content_type_is_bad_request() {
    let app = test_app();
    let request = Request::builder()
        .method("POST")
        .uri("/courses")
        .body(Body::from(cloud_computing().to_string()))
        .unwrap();

    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_unknown_route_is_not_found() {
    let app = test_app();
    let (status, _) = send(&app, "GET", "/nowhere", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
