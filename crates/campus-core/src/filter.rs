//! Filter engine for listed collections
//!
//! Each criteria struct holds one optional criterion per filterable field.
//! An unset criterion places no constraint; a record is kept only when every
//! set criterion matches. The structs deserialize straight from query strings.

use crate::model::{Address, Course, Enrollment, Person};
use crate::types::ValidationError;
use serde::{Deserialize, Serialize};

/// A predicate over stored records
pub trait Filter<T>: Send + Sync {
    fn matches(&self, item: &T) -> bool;
}

/// Matches everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFilter;

impl<T> Filter<T> for NoFilter {
    fn matches(&self, _item: &T) -> bool {
        true
    }
}

/// Clone out the items matching `filter`, keeping their order
pub fn apply_filter<'a, T, I>(items: I, filter: &dyn Filter<T>) -> Vec<T>
where
    T: Clone + 'a,
    I: IntoIterator<Item = &'a T>,
{
    items
        .into_iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect()
}

/// Exact match; an unset criterion always passes
fn matches_eq<V: PartialEq + ?Sized>(criterion: Option<&V>, value: &V) -> bool {
    criterion.map_or(true, |c| c == value)
}

/// Exact match against an optional field; an unset field fails any criterion
fn matches_opt(criterion: Option<&str>, value: Option<&str>) -> bool {
    match criterion {
        None => true,
        Some(c) => value == Some(c),
    }
}

/// Person criteria. `city` and `country` match when any embedded address does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonFilter {
    pub uni: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    /// `YYYY-MM-DD`
    pub birth_date: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
}

impl Filter<Person> for PersonFilter {
    fn matches(&self, p: &Person) -> bool {
        let birth_date = p.birth_date.map(|d| d.format("%Y-%m-%d").to_string());

        matches_eq(self.uni.as_deref(), p.uni.as_str())
            && matches_eq(self.first_name.as_deref(), p.first_name.as_str())
            && matches_eq(self.last_name.as_deref(), p.last_name.as_str())
            && matches_eq(self.email.as_deref(), p.email.as_str())
            && matches_opt(self.phone.as_deref(), p.phone.as_deref())
            && matches_opt(self.birth_date.as_deref(), birth_date.as_deref())
            && self
                .city
                .as_ref()
                .map_or(true, |city| p.addresses.iter().any(|a| &a.city == city))
            && self
                .country
                .as_ref()
                .map_or(true, |country| p.addresses.iter().any(|a| &a.country == country))
    }
}

/// Address criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddressFilter {
    pub street: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl Filter<Address> for AddressFilter {
    fn matches(&self, a: &Address) -> bool {
        matches_eq(self.street.as_deref(), a.street.as_str())
            && matches_eq(self.city.as_deref(), a.city.as_str())
            && matches_opt(self.state.as_deref(), a.state.as_deref())
            && matches_opt(self.postal_code.as_deref(), a.postal_code.as_deref())
            && matches_eq(self.country.as_deref(), a.country.as_str())
    }
}

/// Course criteria; credit bounds are inclusive
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CourseFilter {
    pub code: Option<String>,
    pub dept_id: Option<String>,
    pub instructor: Option<String>,
    pub min_credits: Option<i32>,
    pub max_credits: Option<i32>,
}

impl CourseFilter {
    /// Credit bounds must not be negative
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let errors: Vec<_> = [("min_credits", self.min_credits), ("max_credits", self.max_credits)]
            .into_iter()
            .filter_map(|(field, bound)| match bound {
                Some(n) if n < 0 => Some(ValidationError::OutOfRange {
                    field: field.to_string(),
                    expected: ">= 0".to_string(),
                    actual: i128::from(n),
                }),
                _ => None,
            })
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

impl Filter<Course> for CourseFilter {
    fn matches(&self, c: &Course) -> bool {
        matches_eq(self.code.as_deref(), c.code.as_str())
            && matches_eq(self.dept_id.as_deref(), c.dept_id.as_str())
            && matches_eq(self.instructor.as_deref(), c.instructor.as_str())
            && self.min_credits.map_or(true, |min| c.credits >= min)
            && self.max_credits.map_or(true, |max| c.credits <= max)
    }
}

/// Enrollment criteria
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrollmentFilter {
    pub uni: Option<String>,
    pub course_code: Option<String>,
    pub year: Option<i32>,
    pub term: Option<String>,
    pub status: Option<String>,
}

impl Filter<Enrollment> for EnrollmentFilter {
    fn matches(&self, e: &Enrollment) -> bool {
        matches_eq(self.uni.as_deref(), e.uni.as_str())
            && matches_eq(self.course_code.as_deref(), e.course_code.as_str())
            && matches_eq(self.year.as_ref(), &e.year)
            && matches_eq(self.term.as_deref(), e.term.as_str())
            && matches_eq(self.status.as_deref(), e.status.as_str())
    }
}
