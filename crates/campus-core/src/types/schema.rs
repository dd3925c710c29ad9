//! Schema definitions for payload validation
//!
//! A schema lists the fields a record may carry, their types, whether they
//! must be present and the range / length constraints they must satisfy.

use serde::{Deserialize, Serialize};

/// A schema defines the structure and constraints of a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Schema {
    /// Schema name (usually the entity shape, e.g. "PersonCreate")
    pub name: String,

    /// Fields in declaration order
    pub fields: Vec<SchemaField>,
}

/// A field in a schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    /// Field name
    pub name: String,

    /// Field type
    pub field_type: FieldType,

    /// Whether this field must be present
    #[serde(default)]
    pub required: bool,

    /// Whether an explicit `null` is accepted
    #[serde(default)]
    pub nullable: bool,

    /// Value constraints
    #[serde(default)]
    pub constraints: Constraints,
}

/// Range and length constraints for a field
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Constraints {
    /// Inclusive lower bound for integers
    pub min: Option<i64>,

    /// Inclusive upper bound for integers
    pub max: Option<i64>,

    /// Minimum length for strings, in characters
    pub min_length: Option<usize>,
}

/// Field type enumeration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text
    String,

    /// Whole number (floats and booleans are rejected)
    Integer,

    /// Text shaped like `local@domain.tld`
    Email,

    /// Calendar date in `YYYY-MM-DD` form
    Date,

    /// RFC 3339 timestamp
    DateTime,

    /// Hyphenated UUID
    Uuid,

    /// Array type
    Array {
        /// Type of array elements
        item_type: Box<FieldType>,
    },

    /// Nested object validated against its own schema
    Object {
        schema: Box<Schema>,
    },
}

impl Schema {
    /// Create a new schema
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    /// Add a field, replacing any previous field with the same name
    pub fn add_field(mut self, field: SchemaField) -> Self {
        self.fields.retain(|f| f.name != field.name);
        self.fields.push(field);
        self
    }

    /// Rename the schema
    pub fn renamed(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Get a field by name
    pub fn get_field(&self, name: &str) -> Option<&SchemaField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Check if a field is required
    pub fn is_required(&self, name: &str) -> bool {
        self.get_field(name).map(|f| f.required).unwrap_or(false)
    }

    /// Derive the update shape of this schema.
    ///
    /// Every field becomes optional and nullable; type and range constraints
    /// still apply to supplied values. Whether a null is acceptable for the
    /// merged record is decided later against the full schema.
    pub fn partial(&self, name: impl Into<String>) -> Schema {
        Schema {
            name: name.into(),
            fields: self
                .fields
                .iter()
                .cloned()
                .map(|mut field| {
                    field.required = false;
                    field.nullable = true;
                    field
                })
                .collect(),
        }
    }
}

impl SchemaField {
    /// Create a new optional, non-nullable field
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        Self {
            name: name.into(),
            field_type,
            required: false,
            nullable: false,
            constraints: Constraints::default(),
        }
    }

    /// Mark as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Accept explicit nulls
    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    /// Inclusive integer range
    pub fn range(mut self, min: i64, max: i64) -> Self {
        self.constraints.min = Some(min);
        self.constraints.max = Some(max);
        self
    }

    /// Inclusive integer lower bound
    pub fn min(mut self, min: i64) -> Self {
        self.constraints.min = Some(min);
        self
    }

    /// Minimum string length in characters
    pub fn min_length(mut self, len: usize) -> Self {
        self.constraints.min_length = Some(len);
        self
    }
}

impl FieldType {
    /// Create an array type
    pub fn array(item_type: FieldType) -> Self {
        FieldType::Array {
            item_type: Box::new(item_type),
        }
    }

    /// Create a nested object type
    pub fn object(schema: Schema) -> Self {
        FieldType::Object {
            schema: Box::new(schema),
        }
    }

    /// Human-readable type name used in error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::String => "string",
            FieldType::Integer => "integer",
            FieldType::Email => "email",
            FieldType::Date => "date",
            FieldType::DateTime => "datetime",
            FieldType::Uuid => "uuid",
            FieldType::Array { .. } => "array",
            FieldType::Object { .. } => "object",
        }
    }
}
