//! Payload validation against schemas

use super::schema::{FieldType, Schema, SchemaField};
use chrono::{DateTime, NaiveDate};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use thiserror::Error;
use uuid::Uuid;

/// Validation error
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Type mismatch
    #[error("Type mismatch for field '{field}': expected {expected}, got {actual}")]
    TypeMismatch {
        field: String,
        expected: String,
        actual: String,
    },

    /// Required field missing
    #[error("Required field missing: {field}")]
    RequiredFieldMissing { field: String },

    /// Unknown field
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// Integer outside its inclusive bounds
    #[error("Value for field '{field}' out of range: expected {expected}, got {actual}")]
    OutOfRange {
        field: String,
        expected: String,
        actual: i128,
    },

    /// String shorter than its minimum length
    #[error("Field '{field}' must be at least {min_length} characters, got {actual}")]
    TooShort {
        field: String,
        min_length: usize,
        actual: usize,
    },

    /// Value of the right JSON type but the wrong shape
    #[error("Invalid {expected} for field '{field}': {value}")]
    InvalidFormat {
        field: String,
        expected: String,
        value: String,
    },

    /// Payload could not be decoded at all
    #[error("Malformed payload: {0}")]
    Malformed(String),
}

impl ValidationError {
    /// Path of the offending field (`"request"` when no single field applies)
    pub fn field(&self) -> &str {
        match self {
            ValidationError::TypeMismatch { field, .. }
            | ValidationError::RequiredFieldMissing { field }
            | ValidationError::UnknownField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::TooShort { field, .. }
            | ValidationError::InvalidFormat { field, .. } => field,
            ValidationError::Malformed(_) => "request",
        }
    }
}

/// Validator for JSON payloads against schemas
#[derive(Debug, Clone)]
pub struct Validator {
    /// Whether to allow unknown fields
    allow_unknown_fields: bool,
}

impl Validator {
    /// Create a new strict validator
    pub fn new() -> Self {
        Self {
            allow_unknown_fields: false,
        }
    }

    /// Validator for inbound request bodies: extra fields are ignored
    pub fn lenient() -> Self {
        Self::new().allow_unknown_fields(true)
    }

    /// Allow unknown fields in validation
    pub fn allow_unknown_fields(mut self, allow: bool) -> Self {
        self.allow_unknown_fields = allow;
        self
    }

    /// Validate a value against a schema, collecting every violation
    pub fn validate(&self, value: &Value, schema: &Schema) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        match value {
            Value::Object(obj) => self.validate_object("", obj, schema, &mut errors),
            _ => errors.push(ValidationError::TypeMismatch {
                field: "root".to_string(),
                expected: "object".to_string(),
                actual: type_name(value).to_string(),
            }),
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Validate, then deserialize into `T`
    pub fn parse<T: DeserializeOwned>(
        &self,
        value: Value,
        schema: &Schema,
    ) -> Result<T, Vec<ValidationError>> {
        self.validate(&value, schema)?;
        serde_json::from_value(value)
            .map_err(|e| vec![ValidationError::Malformed(e.to_string())])
    }

    fn validate_object(
        &self,
        prefix: &str,
        obj: &Map<String, Value>,
        schema: &Schema,
        errors: &mut Vec<ValidationError>,
    ) {
        for field in &schema.fields {
            let path = join_path(prefix, &field.name);
            match obj.get(&field.name) {
                None => {
                    if field.required {
                        errors.push(ValidationError::RequiredFieldMissing { field: path });
                    }
                }
                Some(Value::Null) => {
                    if !field.nullable {
                        errors.push(ValidationError::TypeMismatch {
                            field: path,
                            expected: field.field_type.type_name().to_string(),
                            actual: "null".to_string(),
                        });
                    }
                }
                Some(value) => self.validate_field(&path, value, field, errors),
            }
        }

        if !self.allow_unknown_fields {
            for name in obj.keys() {
                if schema.get_field(name).is_none() {
                    errors.push(ValidationError::UnknownField {
                        field: join_path(prefix, name),
                    });
                }
            }
        }
    }

    fn validate_field(
        &self,
        path: &str,
        value: &Value,
        field: &SchemaField,
        errors: &mut Vec<ValidationError>,
    ) {
        if let Err(err) = self.check_type(path, value, &field.field_type, errors) {
            errors.push(err);
            return;
        }

        let constraints = &field.constraints;
        // Integers beyond i64 still arrive here as u64
        let number = value
            .as_i64()
            .map(i128::from)
            .or_else(|| value.as_u64().map(i128::from));
        if let Some(n) = number {
            let below = constraints.min.is_some_and(|min| n < i128::from(min));
            let above = constraints.max.is_some_and(|max| n > i128::from(max));
            if below || above {
                errors.push(ValidationError::OutOfRange {
                    field: path.to_string(),
                    expected: describe_bounds(constraints.min, constraints.max),
                    actual: n,
                });
            }
        }

        if let (Some(min_length), Some(s)) = (constraints.min_length, value.as_str()) {
            let actual = s.chars().count();
            if actual < min_length {
                errors.push(ValidationError::TooShort {
                    field: path.to_string(),
                    min_length,
                    actual,
                });
            }
        }
    }

    /// Check the value's type. Nested violations are pushed onto `errors`;
    /// a mismatch of the value itself is returned.
    fn check_type(
        &self,
        path: &str,
        value: &Value,
        field_type: &FieldType,
        errors: &mut Vec<ValidationError>,
    ) -> Result<(), ValidationError> {
        let mismatch = || ValidationError::TypeMismatch {
            field: path.to_string(),
            expected: field_type.type_name().to_string(),
            actual: type_name(value).to_string(),
        };
        let invalid = |s: &str| ValidationError::InvalidFormat {
            field: path.to_string(),
            expected: field_type.type_name().to_string(),
            value: s.to_string(),
        };

        match field_type {
            FieldType::String => {
                value.as_str().ok_or_else(mismatch)?;
            }

            FieldType::Integer => {
                if !(value.is_i64() || value.is_u64()) {
                    return Err(mismatch());
                }
            }

            FieldType::Email => {
                let s = value.as_str().ok_or_else(mismatch)?;
                if !looks_like_email(s) {
                    return Err(invalid(s));
                }
            }

            FieldType::Date => {
                let s = value.as_str().ok_or_else(mismatch)?;
                NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| invalid(s))?;
            }

            FieldType::DateTime => {
                let s = value.as_str().ok_or_else(mismatch)?;
                DateTime::parse_from_rfc3339(s).map_err(|_| invalid(s))?;
            }

            FieldType::Uuid => {
                let s = value.as_str().ok_or_else(mismatch)?;
                Uuid::parse_str(s).map_err(|_| invalid(s))?;
            }

            FieldType::Array { item_type } => {
                let items = value.as_array().ok_or_else(mismatch)?;
                for (index, item) in items.iter().enumerate() {
                    let item_path = format!("{}[{}]", path, index);
                    if let Err(err) = self.check_type(&item_path, item, item_type, errors) {
                        errors.push(err);
                    }
                }
            }

            FieldType::Object { schema } => {
                let obj = value.as_object().ok_or_else(mismatch)?;
                self.validate_object(path, obj, schema, errors);
            }
        }

        Ok(())
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}.{}", prefix, name)
    }
}

fn describe_bounds(min: Option<i64>, max: Option<i64>) -> String {
    match (min, max) {
        (Some(min), Some(max)) => format!("between {} and {}", min, max),
        (Some(min), None) => format!(">= {}", min),
        (None, Some(max)) => format!("<= {}", max),
        (None, None) => "any integer".to_string(),
    }
}

/// `local@domain.tld` with no whitespace and non-empty labels
fn looks_like_email(s: &str) -> bool {
    if s.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && domain.split('.').all(|label| !label.is_empty())
}

/// Get the JSON type name of a value
fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(n) if n.is_f64() => "float",
        Value::Number(_) => "integer",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
