use super::Resource;
use crate::types::{FieldType, Patch, Schema, SchemaField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Highest credit count a course may carry
const MAX_CREDITS: i64 = 6;

/// Catalog course. The caller supplies the code, so the create and stored
/// shapes are the same.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    /// Catalog code, e.g. "COMS W4153"
    pub code: String,
    pub title: String,
    pub instructor: String,
    /// Credit hours, 0 through 6
    pub credits: i32,
    /// Department identifier, e.g. "COMS"
    pub dept_id: String,
}

/// Partial update of a course. The code is its identity and cannot change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub title: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub instructor: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub credits: Patch<i32>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub dept_id: Patch<String>,
}

fn course_schema() -> Schema {
    Schema::new("Course")
        .add_field(SchemaField::new("code", FieldType::String).required())
        .add_field(SchemaField::new("title", FieldType::String).required())
        .add_field(SchemaField::new("instructor", FieldType::String).required())
        .add_field(
            SchemaField::new("credits", FieldType::Integer)
                .required()
                .range(0, MAX_CREDITS),
        )
        .add_field(SchemaField::new("dept_id", FieldType::String).required())
}

impl Resource for Course {
    type Key = String;
    type Create = Course;
    type Update = CourseUpdate;

    const KIND: &'static str = "Course";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["code"];

    fn create_schema() -> &'static Schema {
        Self::read_schema()
    }

    fn update_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            let mut schema = course_schema().partial("CourseUpdate");
            schema.fields.retain(|f| f.name != "code");
            schema
        })
    }

    fn read_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(course_schema)
    }

    fn key(&self) -> String {
        self.code.clone()
    }

    fn from_create(input: Course, _now: DateTime<Utc>) -> Self {
        input
    }
}
