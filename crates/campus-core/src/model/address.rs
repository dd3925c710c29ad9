use super::Resource;
use crate::types::{FieldType, Patch, Schema, SchemaField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Postal address as supplied by a caller; also embedded in [`Person`](super::Person)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AddressCreate {
    pub street: String,
    pub city: String,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub postal_code: Option<String>,
    pub country: String,
}

/// Stored address
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub id: Uuid,
    pub street: String,
    pub city: String,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of an address
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub street: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub city: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub state: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub postal_code: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub country: Patch<String>,
}

impl AddressCreate {
    /// Schema shared by standalone and embedded addresses
    pub fn schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            Schema::new("AddressCreate")
                .add_field(SchemaField::new("street", FieldType::String).required())
                .add_field(SchemaField::new("city", FieldType::String).required())
                .add_field(SchemaField::new("state", FieldType::String).nullable())
                .add_field(SchemaField::new("postal_code", FieldType::String).nullable())
                .add_field(SchemaField::new("country", FieldType::String).required())
        })
    }
}

impl Resource for Address {
    type Key = Uuid;
    type Create = AddressCreate;
    type Update = AddressUpdate;

    const KIND: &'static str = "Address";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn create_schema() -> &'static Schema {
        AddressCreate::schema()
    }

    fn update_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| AddressCreate::schema().partial("AddressUpdate"))
    }

    fn read_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            AddressCreate::schema()
                .clone()
                .renamed("Address")
                .add_field(SchemaField::new("id", FieldType::Uuid).required())
                .add_field(SchemaField::new("created_at", FieldType::DateTime).required())
                .add_field(SchemaField::new("updated_at", FieldType::DateTime).required())
        })
    }

    fn key(&self) -> Uuid {
        self.id
    }

    fn from_create(input: AddressCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            street: input.street,
            city: input.city,
            state: input.state,
            postal_code: input.postal_code,
            country: input.country,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
