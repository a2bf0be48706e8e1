//! Registration store operations, including the joined read views.

use chrono::Utc;

use elite_driving_core::{
    CourseId, RegistrationId, RegistrationPaymentStatus, RegistrationStatus, StudentId,
};

use super::{Store, StoreError};
use crate::models::{NewRegistration, Registration, RegistrationWithDetails};

impl Store {
    /// Create a registration after checking both foreign keys and the
    /// course's remaining capacity.
    ///
    /// The checks and the insert run under a single write lock; two
    /// concurrent requests cannot both take the last seat.
    ///
    /// # Errors
    ///
    /// - [`StoreError::StudentNotFound`] / [`StoreError::CourseNotFound`]
    ///   when a reference does not resolve.
    /// - [`StoreError::CourseFull`] when pending and confirmed registrations
    ///   already occupy every seat.
    pub fn create_registration(
        &self,
        new: NewRegistration,
    ) -> Result<Registration, StoreError> {
        let mut tables = self.write();

        if !tables.students.contains_key(&new.student_id) {
            return Err(StoreError::StudentNotFound);
        }
        let capacity = tables
            .courses
            .get(&new.course_id)
            .ok_or(StoreError::CourseNotFound)?
            .capacity as usize;

        let seats_taken = tables
            .registrations
            .values()
            .filter(|r| r.course_id == new.course_id && r.status.counts_against_capacity())
            .count();
        if seats_taken >= capacity {
            return Err(StoreError::CourseFull);
        }

        let registration = Registration {
            id: RegistrationId::generate(),
            student_id: new.student_id,
            course_id: new.course_id,
            preferred_start_date: new.preferred_start_date,
            status: new.status,
            payment_status: new.payment_status,
            registration_date: Utc::now(),
        };
        tables
            .registrations
            .insert(registration.id, registration.clone());
        Ok(registration)
    }

    /// Fetch a registration by id.
    #[must_use]
    pub fn registration(&self, id: RegistrationId) -> Option<Registration> {
        self.read().registrations.get(&id).cloned()
    }

    /// Fetch a registration joined with its student, course, and payment.
    ///
    /// Unlike the student view, a dangling student or course reference hides
    /// the whole registration.
    #[must_use]
    pub fn registration_with_details(
        &self,
        id: RegistrationId,
    ) -> Option<RegistrationWithDetails> {
        let tables = self.read();
        let registration = tables.registrations.get(&id)?.clone();

        let student = tables.students.get(&registration.student_id)?.clone();
        let course = tables.courses.get(&registration.course_id)?.clone();
        let payment = tables
            .payments
            .values()
            .find(|p| p.registration_id == id)
            .cloned();

        Some(RegistrationWithDetails {
            registration,
            student,
            course,
            payment,
        })
    }

    /// Every registration owned by the given student.
    #[must_use]
    pub fn student_registrations(&self, student_id: StudentId) -> Vec<Registration> {
        self.read()
            .registrations
            .values()
            .filter(|r| r.student_id == student_id)
            .cloned()
            .collect()
    }

    /// Every registration against the given course.
    #[must_use]
    pub fn course_registrations(&self, course_id: CourseId) -> Vec<Registration> {
        self.read()
            .registrations
            .values()
            .filter(|r| r.course_id == course_id)
            .cloned()
            .collect()
    }

    /// Set a registration's lifecycle status. Returns `None` if the
    /// registration does not exist.
    #[must_use]
    pub fn update_registration_status(
        &self,
        id: RegistrationId,
        status: RegistrationStatus,
    ) -> Option<Registration> {
        let mut tables = self.write();
        let registration = tables.registrations.get_mut(&id)?;
        registration.status = status;
        Some(registration.clone())
    }

    /// Set a registration's payment-progress flag. Returns `None` if the
    /// registration does not exist.
    #[must_use]
    pub fn update_registration_payment_status(
        &self,
        id: RegistrationId,
        payment_status: RegistrationPaymentStatus,
    ) -> Option<Registration> {
        let mut tables = self.write();
        let registration = tables.registrations.get_mut(&id)?;
        registration.payment_status = payment_status;
        Some(registration.clone())
    }
}
