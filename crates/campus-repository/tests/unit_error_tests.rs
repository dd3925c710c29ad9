//! Unit tests for RepositoryError types and error handling

use campus_core::ValidationError;
use campus_repository::RepositoryError;

#[test]
fn test_error_not_found_display() {
    let error = RepositoryError::NotFound {
        kind: "Course",
        key: "COMS W4153".to_string(),
    };

    assert_eq!(error.to_string(), "Course not found: COMS W4153");
}

#[test]
fn test_error_conflict_display() {
    let error = RepositoryError::Conflict {
        kind: "Enrollment",
        key: "abc1234/COMS W4153/2025/FALL".to_string(),
    };

    assert_eq!(
        error.to_string(),
        "Enrollment already exists: abc1234/COMS W4153/2025/FALL"
    );
}

#[test]
fn test_error_validation_display_joins_messages() {
    let error = RepositoryError::Validation(vec![
        ValidationError::RequiredFieldMissing {
            field: "title".to_string(),
        },
        ValidationError::UnknownField {
            field: "extra".to_string(),
        },
    ]);

    assert_eq!(
        error.to_string(),
        "Validation failed: Required field missing: title; Unknown field: extra"
    );
}

#[test]
fn test_error_from_validation_errors() {
    let errors = vec![ValidationError::Malformed("bad".to_string())];
    let error: RepositoryError = errors.clone().into();

    if let RepositoryError::Validation(inner) = error {
        assert_eq!(inner, errors);
    } else {
        panic!("Expected Validation error");
    }
}

#[test]
fn test_error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let error: RepositoryError = json_err.into();

    assert!(error.to_string().starts_with("Serialization error:"));
}

#[test]
fn test_error_is_send_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<RepositoryError>();
}
