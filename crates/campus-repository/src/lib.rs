//! Repository layer for the campus records service
//!
//! This crate provides the storage interface for the four entity types and
//! its process-local implementation.
//!
//! # Features
//!
//! - **Repository trait**: async create / get / list / update per entity type
//! - **In-memory backend**: hash map plus insertion order, one lock per map
//! - **CampusStore**: the four repositories bundled for injection into handlers
//!
//! # Quick Start
//!
//! ```no_run
//! use campus_core::{EnrollmentKey, EnrollmentUpdate, Enrollment};
//! use campus_repository::CampusStore;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let store = CampusStore::in_memory();
//!
//!     store
//!         .enrollments()
//!         .create(Enrollment {
//!             uni: "abc1234".to_string(),
//!             course_code: "COMS W4153".to_string(),
//!             year: 2025,
//!             term: "FALL".to_string(),
//!             status: "enrolled".to_string(),
//!         })
//!         .await?;
//!
//!     let key = EnrollmentKey::new("abc1234", "COMS W4153", 2025, "FALL");
//!     let dropped = store
//!         .enrollments()
//!         .update(&key, EnrollmentUpdate::status("dropped"))
//!         .await?;
//!     println!("Now {}", dropped.status);
//!
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod store;
pub mod traits;

// Re-exports
pub use error::{RepositoryError, RepositoryResult};
pub use memory::InMemoryRepository;
pub use store::CampusStore;
pub use traits::Repository;
