//! Student domain types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use elite_driving_core::{Email, StudentId};

use super::registration::RegistrationWithCourse;
use crate::error::FieldError;

/// A student record.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Student {
    pub id: StudentId,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    pub driving_experience: Option<String>,
    pub comments: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Payload for creating a student.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStudent {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date_of_birth: String,
    #[serde(default)]
    pub driving_experience: Option<String>,
    #[serde(default)]
    pub comments: Option<String>,
}

impl NewStudent {
    /// Check what serde cannot express through types: required strings must
    /// not be blank and the email must be structurally valid.
    ///
    /// # Errors
    ///
    /// Returns every violating field, not just the first one.
    pub fn validate(&self) -> Result<(), Vec<FieldError>> {
        let mut details = Vec::new();

        for (field, value) in [
            ("firstName", &self.first_name),
            ("lastName", &self.last_name),
            ("phone", &self.phone),
            ("dateOfBirth", &self.date_of_birth),
        ] {
            if value.trim().is_empty() {
                details.push(FieldError::new(field, format!("{field} must not be blank")));
            }
        }

        if let Err(e) = Email::parse(&self.email) {
            details.push(FieldError::new("email", e.to_string()));
        }

        if details.is_empty() { Ok(()) } else { Err(details) }
    }
}

/// Partial update for a student; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct StudentPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<String>,
    pub driving_experience: Option<String>,
    pub comments: Option<String>,
}

/// A student joined with every registration they own, each enriched with
/// its course and payment.
#[derive(Debug, Clone, Serialize)]
pub struct StudentWithRegistrations {
    #[serde(flatten)]
    pub student: Student,
    pub registrations: Vec<RegistrationWithCourse>,
}
