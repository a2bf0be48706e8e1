//! Student store operations.

use chrono::Utc;

use elite_driving_core::StudentId;

use super::{Store, StoreError};
use crate::models::{
    NewStudent, RegistrationWithCourse, Student, StudentPatch, StudentWithRegistrations,
};

impl Store {
    /// Create a student, rejecting duplicate emails.
    ///
    /// The uniqueness check and the insert run under one write lock, so two
    /// concurrent submissions of the same email cannot both succeed.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmailExists`] when the email is already taken.
    pub fn create_student(&self, new: NewStudent) -> Result<Student, StoreError> {
        let mut tables = self.write();

        if tables.students.values().any(|s| s.email == new.email) {
            return Err(StoreError::EmailExists);
        }

        let student = Student {
            id: StudentId::generate(),
            first_name: new.first_name,
            last_name: new.last_name,
            email: new.email,
            phone: new.phone,
            date_of_birth: new.date_of_birth,
            driving_experience: new.driving_experience,
            comments: new.comments,
            created_at: Utc::now(),
        };
        tables.students.insert(student.id, student.clone());
        Ok(student)
    }

    /// Fetch a student by id.
    #[must_use]
    pub fn student(&self, id: StudentId) -> Option<Student> {
        self.read().students.get(&id).cloned()
    }

    /// Fetch a student by exact email match.
    #[must_use]
    pub fn student_by_email(&self, email: &str) -> Option<Student> {
        self.read()
            .students
            .values()
            .find(|s| s.email == email)
            .cloned()
    }

    /// Fetch a student joined with every registration they own.
    ///
    /// A registration whose course reference no longer resolves is dropped
    /// from the list rather than failing the whole view.
    #[must_use]
    pub fn student_with_registrations(&self, id: StudentId) -> Option<StudentWithRegistrations> {
        let tables = self.read();
        let student = tables.students.get(&id)?.clone();

        let registrations = tables
            .registrations
            .values()
            .filter(|r| r.student_id == id)
            .filter_map(|r| {
                let course = tables.courses.get(&r.course_id)?.clone();
                let payment = tables
                    .payments
                    .values()
                    .find(|p| p.registration_id == r.id)
                    .cloned();
                Some(RegistrationWithCourse {
                    registration: r.clone(),
                    course,
                    payment,
                })
            })
            .collect();

        Some(StudentWithRegistrations {
            student,
            registrations,
        })
    }

    /// Apply a partial update to a student. Returns `None` if the student
    /// does not exist.
    #[must_use]
    pub fn update_student(&self, id: StudentId, patch: StudentPatch) -> Option<Student> {
        let mut tables = self.write();
        let student = tables.students.get_mut(&id)?;

        if let Some(first_name) = patch.first_name {
            student.first_name = first_name;
        }
        if let Some(last_name) = patch.last_name {
            student.last_name = last_name;
        }
        if let Some(email) = patch.email {
            student.email = email;
        }
        if let Some(phone) = patch.phone {
            student.phone = phone;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            student.date_of_birth = date_of_birth;
        }
        if let Some(driving_experience) = patch.driving_experience {
            student.driving_experience = Some(driving_experience);
        }
        if let Some(comments) = patch.comments {
            student.comments = Some(comments);
        }

        Some(student.clone())
    }
}
