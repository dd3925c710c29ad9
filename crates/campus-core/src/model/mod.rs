//! Entity models
//!
//! Each entity comes in three shapes:
//! - Create: what a caller supplies (no server-generated identity)
//! - Read: the stored record, identity included
//! - Update: every field wrapped in [`Patch`](crate::types::Patch)
//!
//! The [`Resource`] trait ties the shapes of one entity together so the
//! repository and the HTTP layer can treat all four entities uniformly.

mod address;
mod course;
mod enrollment;
mod person;

pub use address::{Address, AddressCreate, AddressUpdate};
pub use course::{Course, CourseUpdate};
pub use enrollment::{Enrollment, EnrollmentUpdate};
pub use person::{Person, PersonCreate, PersonUpdate};

use crate::types::{Schema, ValidationError, Validator};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use std::hash::Hash;

/// A stored entity type and its associated shapes
pub trait Resource:
    Clone + fmt::Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Identity used as the map key
    type Key: Clone + Eq + Hash + fmt::Debug + fmt::Display + Send + Sync + 'static;

    /// Payload accepted on create
    type Create: Serialize + DeserializeOwned + Send + 'static;

    /// Payload accepted on partial update
    type Update: Serialize + DeserializeOwned + Send + Sync + 'static;

    /// Entity name used in messages ("Person", "Course", ...)
    const KIND: &'static str;

    /// Fields a partial update may never change
    const IMMUTABLE_FIELDS: &'static [&'static str];

    /// Schema of the Create shape
    fn create_schema() -> &'static Schema;

    /// Schema of the Update shape
    fn update_schema() -> &'static Schema;

    /// Schema of the stored record
    fn read_schema() -> &'static Schema;

    /// The record's identity
    fn key(&self) -> Self::Key;

    /// Build the stored record, assigning identity where it is generated
    fn from_create(input: Self::Create, now: DateTime<Utc>) -> Self;

    /// Record a modification time, for entities that track one
    fn touch(&mut self, _now: DateTime<Utc>) {}
}

/// Check a record against its entity's full schema
pub fn validate_record<T: Resource>(record: &T) -> Result<(), Vec<ValidationError>> {
    let value = serde_json::to_value(record)
        .map_err(|e| vec![ValidationError::Malformed(e.to_string())])?;
    Validator::new().validate(&value, T::read_schema())
}

/// Merge the supplied fields of `patch` onto `stored`.
///
/// Fields absent from the patch keep their stored value, immutable fields are
/// skipped even if present, and the merged record must pass the full schema.
/// `stored` itself is never modified.
pub fn apply_patch<T: Resource>(stored: &T, patch: &T::Update) -> Result<T, Vec<ValidationError>> {
    let malformed = |e: serde_json::Error| vec![ValidationError::Malformed(e.to_string())];

    let mut merged = serde_json::to_value(stored).map_err(malformed)?;
    let changes = serde_json::to_value(patch).map_err(malformed)?;

    if let (Value::Object(target), Value::Object(changes)) = (&mut merged, changes) {
        for (field, value) in changes {
            if T::IMMUTABLE_FIELDS.contains(&field.as_str()) {
                continue;
            }
            target.insert(field, value);
        }
    }

    Validator::new().parse(merged, T::read_schema())
}
