//! Process-local repository backed by a hash map

use async_trait::async_trait;
use campus_core::{apply_filter, apply_patch, model::validate_record, Filter, Resource};
use chrono::Utc;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;

use crate::{Repository, RepositoryError, RepositoryResult};

/// In-memory repository for one entity type.
///
/// Records live in a map keyed by identity; a separate key list remembers
/// insertion order for listing. Both sit behind a single lock that every
/// operation holds for its whole duration.
#[derive(Debug)]
pub struct InMemoryRepository<T: Resource> {
    entries: RwLock<Entries<T>>,
}

#[derive(Debug)]
struct Entries<T: Resource> {
    records: HashMap<T::Key, T>,
    order: Vec<T::Key>,
}

impl<T: Resource> InMemoryRepository<T> {
    /// Create an empty repository
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(Entries {
                records: HashMap::new(),
                order: Vec::new(),
            }),
        }
    }
}

impl<T: Resource> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

fn not_found<T: Resource>(key: &T::Key) -> RepositoryError {
    RepositoryError::NotFound {
        kind: T::KIND,
        key: key.to_string(),
    }
}

#[async_trait]
impl<T: Resource> Repository<T> for InMemoryRepository<T> {
    async fn create(&self, input: T::Create) -> RepositoryResult<T> {
        let record = T::from_create(input, Utc::now());
        validate_record(&record)?;

        let key = record.key();
        let mut entries = self.entries.write().await;
        if entries.records.contains_key(&key) {
            debug!(kind = T::KIND, key = %key, "Rejected duplicate");
            return Err(RepositoryError::Conflict {
                kind: T::KIND,
                key: key.to_string(),
            });
        }

        entries.order.push(key.clone());
        entries.records.insert(key.clone(), record.clone());
        debug!(kind = T::KIND, key = %key, "Created record");

        Ok(record)
    }

    async fn get(&self, key: &T::Key) -> RepositoryResult<T> {
        let entries = self.entries.read().await;
        entries
            .records
            .get(key)
            .cloned()
            .ok_or_else(|| not_found::<T>(key))
    }

    async fn list(&self, filter: &dyn Filter<T>) -> RepositoryResult<Vec<T>> {
        let entries = self.entries.read().await;
        let ordered = entries
            .order
            .iter()
            .filter_map(|key| entries.records.get(key));
        Ok(apply_filter(ordered, filter))
    }

    async fn update(&self, key: &T::Key, patch: T::Update) -> RepositoryResult<T> {
        let mut entries = self.entries.write().await;
        let stored = entries.records.get_mut(key).ok_or_else(|| not_found::<T>(key))?;

        let mut merged = apply_patch(stored, &patch)?;
        merged.touch(Utc::now());
        *stored = merged.clone();
        debug!(kind = T::KIND, key = %key, "Updated record");

        Ok(merged)
    }

    async fn count(&self) -> usize {
        self.entries.read().await.records.len()
    }
}
