//! Composite key for enrollments
//!
//! An enrollment is identified by the student, the course and the academic
//! period. The key keeps the four components as separate fields, so no
//! delimiter is reserved and component values may contain any character.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identity of an enrollment: (uni, course_code, year, term)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EnrollmentKey {
    pub uni: String,
    pub course_code: String,
    pub year: i32,
    pub term: String,
}

impl EnrollmentKey {
    pub fn new(
        uni: impl Into<String>,
        course_code: impl Into<String>,
        year: i32,
        term: impl Into<String>,
    ) -> Self {
        Self {
            uni: uni.into(),
            course_code: course_code.into(),
            year,
            term: term.into(),
        }
    }
}

/// Path-style rendering for logs and error messages; not used for lookup
impl fmt::Display for EnrollmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}/{}/{}/{}",
            self.uni, self.course_code, self.year, self.term
        )
    }
}
