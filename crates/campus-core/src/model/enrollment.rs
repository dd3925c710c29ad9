use super::Resource;
use crate::key::EnrollmentKey;
use crate::types::{FieldType, Patch, Schema, SchemaField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// A student's enrollment in a course for one term.
///
/// `status` is conventionally "enrolled", "waitlisted" or "dropped" but is
/// stored as free text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub uni: String,
    pub course_code: String,
    pub year: i32,
    /// "FALL", "SPRING" or "SUMMER" by convention
    pub term: String,
    pub status: String,
}

/// The only mutable part of an enrollment
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub status: Patch<String>,
}

impl EnrollmentUpdate {
    pub fn status(status: impl Into<String>) -> Self {
        Self {
            status: Patch::Value(status.into()),
        }
    }
}

impl Enrollment {
    /// Composite identity of this enrollment
    pub fn enrollment_key(&self) -> EnrollmentKey {
        EnrollmentKey::new(
            self.uni.as_str(),
            self.course_code.as_str(),
            self.year,
            self.term.as_str(),
        )
    }
}

impl Resource for Enrollment {
    type Key = EnrollmentKey;
    type Create = Enrollment;
    type Update = EnrollmentUpdate;

    const KIND: &'static str = "Enrollment";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["uni", "course_code", "year", "term"];

    fn create_schema() -> &'static Schema {
        Self::read_schema()
    }

    fn update_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new("EnrollmentUpdate")
                .add_field(SchemaField::new("status", FieldType::String).nullable())
        })
    }

    fn read_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new("Enrollment")
                .add_field(SchemaField::new("uni", FieldType::String).required().min_length(2))
                .add_field(SchemaField::new("course_code", FieldType::String).required())
                .add_field(
                    SchemaField::new("year", FieldType::Integer)
                        .required()
                        .range(i64::from(i32::MIN), i64::from(i32::MAX)),
                )
                .add_field(SchemaField::new("term", FieldType::String).required())
                .add_field(SchemaField::new("status", FieldType::String).required())
        })
    }

    fn key(&self) -> EnrollmentKey {
        self.enrollment_key()
    }

    fn from_create(input: Enrollment, _now: DateTime<Utc>) -> Self {
        input
    }
}
