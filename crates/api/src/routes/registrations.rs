//! Registration route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use serde::Deserialize;
use tracing::instrument;

use elite_driving_core::{RegistrationId, RegistrationPaymentStatus, RegistrationStatus};

use crate::error::{ApiError, FieldError, Result};
use crate::models::{NewRegistration, RegistrationWithDetails};
use crate::state::AppState;

/// Request body for creating a registration.
///
/// The ids arrive as opaque strings; anything that does not parse as an id
/// cannot reference a record and resolves to 404, same as an unknown id.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRegistrationRequest {
    pub student_id: String,
    pub course_id: String,
    #[serde(default)]
    pub preferred_start_date: Option<String>,
    #[serde(default)]
    pub status: RegistrationStatus,
    #[serde(default)]
    pub payment_status: RegistrationPaymentStatus,
}

impl CreateRegistrationRequest {
    fn validate(&self) -> std::result::Result<(), Vec<FieldError>> {
        let mut details = Vec::new();
        if self.student_id.trim().is_empty() {
            details.push(FieldError::new("studentId", "studentId must not be blank"));
        }
        if self.course_id.trim().is_empty() {
            details.push(FieldError::new("courseId", "courseId must not be blank"));
        }
        if details.is_empty() { Ok(()) } else { Err(details) }
    }
}

/// Request body for updating a registration's lifecycle status.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: Option<String>,
}

/// Request body for updating a registration's payment progress.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentStatusRequest {
    #[serde(default)]
    pub payment_status: Option<String>,
}

/// Create a registration and return the joined view.
///
/// Fails with 404 when either reference does not resolve and with 409
/// `COURSE_FULL` when the course has no free seats.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreateRegistrationRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<RegistrationWithDetails>)> {
    let Json(req) = body.map_err(|rej| ApiError::invalid_body("registration", &rej))?;
    req.validate()
        .map_err(|details| ApiError::validation("Invalid registration data", details))?;

    let student_id = req
        .student_id
        .parse()
        .map_err(|_| ApiError::NotFound("Student"))?;
    let course_id = req
        .course_id
        .parse()
        .map_err(|_| ApiError::NotFound("Course"))?;

    let registration = state.store().create_registration(NewRegistration {
        student_id,
        course_id,
        preferred_start_date: req.preferred_start_date,
        status: req.status,
        payment_status: req.payment_status,
    })?;
    tracing::info!(
        registration_id = %registration.id,
        course_id = %course_id,
        "Registration created"
    );

    let details = state
        .store()
        .registration_with_details(registration.id)
        .ok_or_else(|| ApiError::internal("Failed to create registration"))?;
    Ok((StatusCode::CREATED, Json(details)))
}

/// Fetch a registration joined with its student, course, and payment.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<RegistrationWithDetails>> {
    let id: RegistrationId = id.parse().map_err(|_| ApiError::NotFound("Registration"))?;

    state
        .store()
        .registration_with_details(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Registration"))
}

/// Update a registration's lifecycle status and return the joined view.
#[instrument(skip_all)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<UpdateStatusRequest>, JsonRejection>,
) -> Result<Json<RegistrationWithDetails>> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Status is required"))?;
    let Some(status) = req.status.filter(|s| !s.is_empty()) else {
        return Err(ApiError::BadRequest("Status is required"));
    };
    let status: RegistrationStatus = status
        .parse()
        .map_err(|_| ApiError::invalid_status("Invalid status", RegistrationStatus::VALID))?;

    let id: RegistrationId = id.parse().map_err(|_| ApiError::NotFound("Registration"))?;
    state
        .store()
        .update_registration_status(id, status)
        .ok_or(ApiError::NotFound("Registration"))?;

    state
        .store()
        .registration_with_details(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Registration"))
}

/// Update a registration's payment progress and return the joined view.
#[instrument(skip_all)]
pub async fn update_payment_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<UpdatePaymentStatusRequest>, JsonRejection>,
) -> Result<Json<RegistrationWithDetails>> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Payment status is required"))?;
    let Some(payment_status) = req.payment_status.filter(|s| !s.is_empty()) else {
        return Err(ApiError::BadRequest("Payment status is required"));
    };
    let payment_status: RegistrationPaymentStatus = payment_status.parse().map_err(|_| {
        ApiError::invalid_status("Invalid payment status", RegistrationPaymentStatus::VALID)
    })?;

    let id: RegistrationId = id.parse().map_err(|_| ApiError::NotFound("Registration"))?;
    state
        .store()
        .update_registration_payment_status(id, payment_status)
        .ok_or(ApiError::NotFound("Registration"))?;

    state
        .store()
        .registration_with_details(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Registration"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_defaults_statuses_to_pending() {
        let req: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "studentId": "s-1",
            "courseId": "c-1"
        }))
        .unwrap();

        assert_eq!(req.status, RegistrationStatus::Pending);
        assert_eq!(req.payment_status, RegistrationPaymentStatus::Pending);
        assert!(req.preferred_start_date.is_none());
    }

    #[test]
    fn test_create_request_rejects_blank_ids() {
        let req: CreateRegistrationRequest = serde_json::from_value(serde_json::json!({
            "studentId": "",
            "courseId": "  "
        }))
        .unwrap();

        let details = req.validate().unwrap_err();
        let fields: Vec<&str> = details.iter().map(|d| d.field).collect();
        assert_eq!(fields, vec!["studentId", "courseId"]);
    }

    #[test]
    fn test_update_status_request_tolerates_missing_field() {
        let req: UpdateStatusRequest = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(req.status.is_none());

        let req: UpdatePaymentStatusRequest = serde_json::from_value(serde_json::json!({
            "paymentStatus": "paid"
        }))
        .unwrap();
        assert_eq!(req.payment_status.as_deref(), Some("paid"));
    }
}
