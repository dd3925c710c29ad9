//! Presence-aware field wrapper for partial updates
//!
//! `Option<T>` cannot tell "field omitted" apart from "field set to null".
//! Update payloads wrap every field in [`Patch`] so that only fields the
//! caller actually sent are merged onto the stored record.
//!
//! Fields must be declared with `#[serde(default, skip_serializing_if = "Patch::is_absent")]`
//! so that omitted keys deserialize to [`Patch::Absent`] and are dropped
//! again on serialization.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of an update payload
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Patch<T> {
    /// Not supplied; the stored value is kept
    Absent,
    /// Explicitly set to null
    Null,
    /// Explicitly set to a value
    Value(T),
}

impl<T> Patch<T> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Patch::Absent)
    }

    /// A present field: `None` becomes an explicit null
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Patch::Null, Patch::Value)
    }
}

impl<T> Default for Patch<T> {
    fn default() -> Self {
        Patch::Absent
    }
}

impl<T> From<T> for Patch<T> {
    fn from(value: T) -> Self {
        Patch::Value(value)
    }
}

impl<'de, T> Deserialize<'de> for Patch<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Only reached when the key is present; absent keys use `Default`
        Option::<T>::deserialize(deserializer).map(Patch::from_option)
    }
}

impl<T> Serialize for Patch<T>
where
    T: Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Patch::Value(v) => v.serialize(serializer),
            Patch::Absent | Patch::Null => serializer.serialize_none(),
        }
    }
}
