//! Student route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use tracing::instrument;

use elite_driving_core::StudentId;

use crate::error::{ApiError, Result};
use crate::models::{NewStudent, Student, StudentWithRegistrations};
use crate::state::AppState;

/// Create a student from a registration-form submission.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<NewStudent>, JsonRejection>,
) -> Result<(StatusCode, Json<Student>)> {
    let Json(new) = body.map_err(|rej| ApiError::invalid_body("student", &rej))?;
    new.validate()
        .map_err(|details| ApiError::validation("Invalid student data", details))?;

    let student = state.store().create_student(new)?;
    tracing::info!(student_id = %student.id, "Student created");
    Ok((StatusCode::CREATED, Json(student)))
}

/// Fetch a student together with every registration they own.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<StudentWithRegistrations>> {
    // A malformed id cannot match any record.
    let id: StudentId = id.parse().map_err(|_| ApiError::NotFound("Student"))?;

    state
        .store()
        .student_with_registrations(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Student"))
}

/// Fetch a student by email, without the joined registrations.
pub async fn show_by_email(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Student>> {
    state
        .store()
        .student_by_email(&email)
        .map(Json)
        .ok_or(ApiError::NotFound("Student"))
}
