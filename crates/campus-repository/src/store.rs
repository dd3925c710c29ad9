//! The service-wide store: one repository per entity type

use campus_core::{Address, Course, Enrollment, Person};
use std::sync::Arc;

use crate::{InMemoryRepository, Repository};

/// Bundle of the four entity repositories.
///
/// Built once at startup and handed to request handlers; cloning shares the
/// underlying repositories. Each repository guards its own map, so there is
/// no coordination between entity types.
#[derive(Clone)]
pub struct CampusStore {
    persons: Arc<dyn Repository<Person>>,
    addresses: Arc<dyn Repository<Address>>,
    courses: Arc<dyn Repository<Course>>,
    enrollments: Arc<dyn Repository<Enrollment>>,
}

impl CampusStore {
    /// Assemble a store from explicit backends
    pub fn new(
        persons: Arc<dyn Repository<Person>>,
        addresses: Arc<dyn Repository<Address>>,
        courses: Arc<dyn Repository<Course>>,
        enrollments: Arc<dyn Repository<Enrollment>>,
    ) -> Self {
        Self {
            persons,
            addresses,
            courses,
            enrollments,
        }
    }

    /// Empty store backed by process memory
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryRepository::<Person>::new()),
            Arc::new(InMemoryRepository::<Address>::new()),
            Arc::new(InMemoryRepository::<Course>::new()),
            Arc::new(InMemoryRepository::<Enrollment>::new()),
        )
    }

    pub fn persons(&self) -> &dyn Repository<Person> {
        self.persons.as_ref()
    }

    pub fn addresses(&self) -> &dyn Repository<Address> {
        self.addresses.as_ref()
    }

    pub fn courses(&self) -> &dyn Repository<Course> {
        self.courses.as_ref()
    }

    pub fn enrollments(&self) -> &dyn Repository<Enrollment> {
        self.enrollments.as_ref()
    }
}

impl Default for CampusStore {
    fn default() -> Self {
        Self::in_memory()
    }
}
