//! Core trait definition for the repository pattern
//!
//! [`Repository`] is the storage interface for one entity type. The
//! in-memory implementation lives in [`crate::memory`]; other backends only
//! need to implement this trait to be plugged into
//! [`CampusStore`](crate::CampusStore).
//!
//! # Examples
//!
//! ```no_run
//! use campus_core::{Course, CourseFilter};
//! use campus_repository::{InMemoryRepository, Repository};
//!
//! # #[tokio::main]
//! # async fn main() -> anyhow::Result<()> {
//! let repo = InMemoryRepository::<Course>::new();
//!
//! repo.create(Course {
//!     code: "COMS W4153".to_string(),
//!     title: "Cloud Computing".to_string(),
//!     instructor: "Donald F. Ferguson".to_string(),
//!     credits: 3,
//!     dept_id: "COMS".to_string(),
//! })
//! .await?;
//!
//! let coms = repo
//!     .list(&CourseFilter {
//!         dept_id: Some("COMS".to_string()),
//!         ..Default::default()
//!     })
//!     .await?;
//! assert_eq!(coms.len(), 1);
//! # Ok(())
//! # }
//! ```

use async_trait::async_trait;
use campus_core::{Filter, Resource};

use crate::RepositoryResult;

/// Storage for one entity type
///
/// # Implementation Notes
///
/// - `create` must check for an existing identity and insert atomically
/// - `list` returns records in insertion order and never mutates storage
/// - `update` never changes identity fields
///
/// # Thread Safety
///
/// All implementations must be `Send + Sync` for use across async tasks.
#[async_trait]
pub trait Repository<T: Resource>: Send + Sync {
    /// Store a new record built from `input`
    ///
    /// Identity is generated for entities that do not carry a caller-supplied
    /// one. Fails with `Conflict` if the identity is already taken and with
    /// `Validation` if the record breaks its schema.
    async fn create(&self, input: T::Create) -> RepositoryResult<T>;

    /// Fetch one record; `NotFound` if absent
    async fn get(&self, key: &T::Key) -> RepositoryResult<T>;

    /// Every record matching `filter`, in insertion order
    async fn list(&self, filter: &dyn Filter<T>) -> RepositoryResult<Vec<T>>;

    /// Merge the supplied fields of `patch` onto a stored record
    ///
    /// Fails with `NotFound` if absent and with `Validation` if the merged
    /// record breaks its schema; the stored record is untouched on failure.
    async fn update(&self, key: &T::Key, patch: T::Update) -> RepositoryResult<T>;

    /// Number of stored records
    async fn count(&self) -> usize;
}
