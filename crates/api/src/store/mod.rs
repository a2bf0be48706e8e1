//! In-memory entity store.
//!
//! The store is the system of record for this process's lifetime:
//!
//! ## Collections
//!
//! - `users` - Legacy accounts (no HTTP surface)
//! - `students` - Registration intake records
//! - `courses` - The course catalog, seeded at startup
//! - `registrations` - Student-to-course links with capacity enforcement
//! - `payments` - Payment records attached to registrations
//!
//! There is no persistence layer; a restart wipes all data. Foreign keys are
//! plain identifiers resolved by lookup, and nothing is ever deleted, so
//! references cannot dangle in practice (the join views still tolerate it).

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use elite_driving_core::{CourseId, PaymentId, RegistrationId, StudentId, UserId};

use crate::models::{Course, Payment, Registration, Student, User};

mod courses;
mod payments;
mod registrations;
mod seed;
mod students;
mod users;

/// Errors that can occur during checked store mutations.
///
/// Plain reads never fail; callers check for `None` instead. Only the
/// creations that enforce a referential or business rule return `Result`.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// A student with the submitted email already exists.
    #[error("student with this email already exists")]
    EmailExists,

    /// Referenced student does not resolve.
    #[error("student not found")]
    StudentNotFound,

    /// Referenced course does not resolve.
    #[error("course not found")]
    CourseNotFound,

    /// Referenced registration does not resolve.
    #[error("registration not found")]
    RegistrationNotFound,

    /// Every seat on the course is taken by a pending or confirmed
    /// registration.
    #[error("course is at full capacity")]
    CourseFull,
}

#[derive(Default)]
struct Tables {
    users: HashMap<UserId, User>,
    students: HashMap<StudentId, Student>,
    courses: HashMap<CourseId, Course>,
    registrations: HashMap<RegistrationId, Registration>,
    payments: HashMap<PaymentId, Payment>,
}

/// In-memory keyed collections for the five entity kinds.
///
/// Construct once at process start and share through `AppState`; the store
/// drops with the state at process stop. A single `RwLock` guards all
/// collections: reads take the read lock, mutations the write lock, so each
/// checked create (duplicate email, course capacity) is atomic with its
/// insert even under a concurrent runtime.
pub struct Store {
    tables: RwLock<Tables>,
}

impl Store {
    /// Create a store seeded with the standard course catalog.
    #[must_use]
    pub fn new() -> Self {
        let store = Self {
            tables: RwLock::new(Tables::default()),
        };
        for course in seed::sample_courses() {
            store.create_course(course);
        }
        store
    }

    fn read(&self) -> RwLockReadGuard<'_, Tables> {
        // A poisoned lock means a handler panicked mid-operation; the maps
        // themselves are still structurally valid, so keep serving.
        self.tables.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Tables> {
        self.tables.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_store_carries_seed_catalog() {
        let store = Store::new();
        let courses = store.active_courses();
        assert_eq!(courses.len(), 4);
        assert!(courses.iter().all(|c| c.is_active == 1));

        let mut titles: Vec<&str> = courses.iter().map(|c| c.title.as_str()).collect();
        titles.sort_unstable();
        assert_eq!(
            titles,
            vec!["Heavy Vehicles", "Light Vehicles", "Motorcycle", "Simulator"]
        );
    }

    #[test]
    fn test_seed_capacities_match_catalog() {
        let store = Store::new();
        let capacity_of = |title: &str| {
            store
                .active_courses()
                .into_iter()
                .find(|c| c.title == title)
                .unwrap()
                .capacity
        };

        assert_eq!(capacity_of("Light Vehicles"), 4);
        assert_eq!(capacity_of("Heavy Vehicles"), 3);
        assert_eq!(capacity_of("Motorcycle"), 6);
        assert_eq!(capacity_of("Simulator"), 8);
    }
}
