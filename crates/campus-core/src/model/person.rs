use super::{AddressCreate, Resource};
use crate::types::{FieldType, Patch, Schema, SchemaField};
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use uuid::Uuid;

/// Person as supplied by a caller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonCreate {
    /// Institutional identifier, e.g. "abc1234"
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub birth_date: Option<NaiveDate>,
    /// Embedded addresses, in the order supplied
    #[serde(default)]
    pub addresses: Vec<AddressCreate>,
}

/// Stored person
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Uuid,
    pub uni: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub addresses: Vec<AddressCreate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Partial update of a person
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonUpdate {
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub uni: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub first_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub last_name: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub email: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub birth_date: Patch<NaiveDate>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub addresses: Patch<Vec<AddressCreate>>,
}

fn create_schema() -> Schema {
    Schema::new("PersonCreate")
        .add_field(SchemaField::new("uni", FieldType::String).required().min_length(2))
        .add_field(SchemaField::new("first_name", FieldType::String).required())
        .add_field(SchemaField::new("last_name", FieldType::String).required())
        .add_field(SchemaField::new("email", FieldType::Email).required())
        .add_field(SchemaField::new("phone", FieldType::String).nullable())
        .add_field(SchemaField::new("birth_date", FieldType::Date).nullable())
        .add_field(SchemaField::new(
            "addresses",
            FieldType::array(FieldType::object(AddressCreate::schema().clone())),
        ))
}

impl Resource for Person {
    type Key = Uuid;
    type Create = PersonCreate;
    type Update = PersonUpdate;

    const KIND: &'static str = "Person";
    const IMMUTABLE_FIELDS: &'static [&'static str] = &["id", "created_at"];

    fn create_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(create_schema)
    }

    fn update_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| create_schema().partial("PersonUpdate"))
    }

    fn read_schema() -> &'static Schema {
        static SCHEMA: OnceLock<Schema> = OnceLock::new();
        SCHEMA.get_or_init(|| {
            create_schema()
                .renamed("Person")
                .add_field(
                    SchemaField::new(
                        "addresses",
                        FieldType::array(FieldType::object(AddressCreate::schema().clone())),
                    )
                    .required(),
                )
                .add_field(SchemaField::new("id", FieldType::Uuid).required())
                .add_field(SchemaField::new("created_at", FieldType::DateTime).required())
                .add_field(SchemaField::new("updated_at", FieldType::DateTime).required())
        })
    }

    fn key(&self) -> Uuid {
        self.id
    }

    fn from_create(input: PersonCreate, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            uni: input.uni,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            phone: input.phone,
            birth_date: input.birth_date,
            addresses: input.addresses,
            created_at: now,
            updated_at: now,
        }
    }

    fn touch(&mut self, now: DateTime<Utc>) {
        self.updated_at = now;
    }
}
