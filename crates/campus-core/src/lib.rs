//! Campus Core - entity types and validation for the campus records service
//!
//! This crate provides the pieces shared by the repository and the server:
//! - Schema definitions and the validator that checks payloads against them
//! - Entity models (Person, Address, Course, Enrollment) and their
//!   Create / Read / Update shapes
//! - The composite key used to identify enrollments
//! - The filter engine applied to listed collections

pub mod filter;
pub mod key;
pub mod model;
pub mod types;

// Re-export commonly used types
pub use filter::{
    apply_filter, AddressFilter, CourseFilter, EnrollmentFilter, Filter, NoFilter, PersonFilter,
};
pub use key::EnrollmentKey;
pub use model::{
    apply_patch, Address, AddressCreate, AddressUpdate, Course, CourseUpdate, Enrollment,
    EnrollmentUpdate, Person, PersonCreate, PersonUpdate, Resource,
};
pub use types::{FieldType, Patch, Schema, SchemaField, ValidationError, Validator};
