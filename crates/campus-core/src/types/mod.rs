//! Type system for payload validation
//!
//! This module contains:
//! - Schema definitions with per-field constraints
//! - The validator that checks JSON payloads against schemas
//! - `Patch`, the presence-aware field wrapper used by update payloads

pub mod patch;
pub mod schema;
pub mod validator;

pub use patch::Patch;
pub use schema::{Constraints, FieldType, Schema, SchemaField};
pub use validator::{ValidationError, Validator};
