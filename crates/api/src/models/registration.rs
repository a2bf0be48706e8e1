//! Registration domain types, including the joined views the read
//! endpoints return.

use chrono::{DateTime, Utc};
use serde::Serialize;

use elite_driving_core::{
    CourseId, RegistrationId, RegistrationPaymentStatus, RegistrationStatus, StudentId,
};

use super::course::Course;
use super::payment::Payment;
use super::student::Student;

/// A registration linking a student to a course.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Registration {
    pub id: RegistrationId,
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub preferred_start_date: Option<String>,
    pub status: RegistrationStatus,
    pub payment_status: RegistrationPaymentStatus,
    pub registration_date: DateTime<Utc>,
}

/// Input for creating a registration.
///
/// Both references are checked against the store at creation time; the
/// statuses default to pending.
#[derive(Debug, Clone)]
pub struct NewRegistration {
    pub student_id: StudentId,
    pub course_id: CourseId,
    pub preferred_start_date: Option<String>,
    pub status: RegistrationStatus,
    pub payment_status: RegistrationPaymentStatus,
}

impl NewRegistration {
    /// A pending registration with no preferred start date.
    #[must_use]
    pub fn new(student_id: StudentId, course_id: CourseId) -> Self {
        Self {
            student_id,
            course_id,
            preferred_start_date: None,
            status: RegistrationStatus::default(),
            payment_status: RegistrationPaymentStatus::default(),
        }
    }
}

/// A registration joined with its student, course, and payment (if any).
///
/// The registration's own fields flatten into the top level, so the wire
/// shape is the registration record plus `student`/`course`/`payment` keys.
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithDetails {
    #[serde(flatten)]
    pub registration: Registration,
    pub student: Student,
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}

/// A registration joined with its course and payment, used inside
/// [`super::student::StudentWithRegistrations`].
#[derive(Debug, Clone, Serialize)]
pub struct RegistrationWithCourse {
    #[serde(flatten)]
    pub registration: Registration,
    pub course: Course,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment: Option<Payment>,
}
