//! Unified error handling with Sentry integration.
//!
//! Provides a unified `ApiError` type that renders every failure as the JSON
//! error body the front-end expects: `{"error": ...}` plus an optional stable
//! `code`, a `details` list for validation failures, or the `validStatuses`
//! list for status-update rejections. All route handlers return
//! `Result<T, ApiError>`.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

use crate::store::StoreError;

/// A single field that failed payload validation.
#[derive(Debug, Clone, Serialize)]
pub struct FieldError {
    /// Wire-format field name (camelCase, as the client sent it).
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    /// Create a field error.
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Payload failed structural or semantic validation.
    #[error("{error}")]
    Validation {
        error: String,
        details: Vec<FieldError>,
    },

    /// A status-update value outside the accepted enumeration.
    #[error("{error}")]
    InvalidStatus {
        error: &'static str,
        valid_statuses: &'static [&'static str],
    },

    /// Bad request from client (no field detail to report).
    #[error("{0}")]
    BadRequest(&'static str),

    /// Resource not found; carries the entity name ("Student", "Course", ...).
    #[error("{0} not found")]
    NotFound(&'static str),

    /// A student with the submitted email already exists.
    #[error("Student with this email already exists")]
    EmailExists,

    /// The course has no free seats left.
    #[error("Course is at full capacity")]
    CourseFull,

    /// Internal server error; carries the generic client-facing message only.
    /// The underlying cause must be logged where it arises, never returned.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Validation failure with per-field detail.
    #[must_use]
    pub fn validation(error: impl Into<String>, details: Vec<FieldError>) -> Self {
        Self::Validation {
            error: error.into(),
            details,
        }
    }

    /// 400 for a request body the extractor could not parse at all.
    #[must_use]
    pub fn invalid_body(what: &str, rejection: &JsonRejection) -> Self {
        Self::Validation {
            error: format!("Invalid {what} data"),
            details: vec![FieldError::new("body", rejection.body_text())],
        }
    }

    /// 400 for a status value outside the accepted set.
    #[must_use]
    pub const fn invalid_status(
        error: &'static str,
        valid_statuses: &'static [&'static str],
    ) -> Self {
        Self::InvalidStatus {
            error,
            valid_statuses,
        }
    }

    /// 500 with a generic client-facing message.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::EmailExists => Self::EmailExists,
            StoreError::CourseFull => Self::CourseFull,
            StoreError::StudentNotFound => Self::NotFound("Student"),
            StoreError::CourseNotFound => Self::NotFound("Course"),
            StoreError::RegistrationNotFound => Self::NotFound("Registration"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        // Capture server errors to Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        let status = match &self {
            Self::Validation { .. } | Self::InvalidStatus { .. } | Self::BadRequest(_) => {
                StatusCode::BAD_REQUEST
            }
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::EmailExists | Self::CourseFull => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = match self {
            Self::Validation { error, details } => json!({
                "error": error,
                "details": details,
            }),
            Self::InvalidStatus {
                error,
                valid_statuses,
            } => json!({
                "error": error,
                "validStatuses": valid_statuses,
            }),
            Self::EmailExists => json!({
                "error": "Student with this email already exists",
                "code": "EMAIL_EXISTS",
            }),
            Self::CourseFull => json!({
                "error": "Course is at full capacity",
                "code": "COURSE_FULL",
            }),
            Self::BadRequest(message) => json!({ "error": message }),
            Self::NotFound(entity) => json!({ "error": format!("{entity} not found") }),
            Self::Internal(message) => json!({ "error": message }),
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for `ApiError`.
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn get_status(err: ApiError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_api_error_display() {
        let err = ApiError::NotFound("Student");
        assert_eq!(err.to_string(), "Student not found");

        let err = ApiError::validation("Invalid student data", Vec::new());
        assert_eq!(err.to_string(), "Invalid student data");
    }

    #[test]
    fn test_api_error_status_codes() {
        assert_eq!(
            get_status(ApiError::validation("Invalid student data", Vec::new())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::invalid_status(
                "Invalid status",
                elite_driving_core::RegistrationStatus::VALID
            )),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::BadRequest("Status is required")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(ApiError::NotFound("Course")),
            StatusCode::NOT_FOUND
        );
        assert_eq!(get_status(ApiError::EmailExists), StatusCode::CONFLICT);
        assert_eq!(get_status(ApiError::CourseFull), StatusCode::CONFLICT);
        assert_eq!(
            get_status(ApiError::internal("Failed to create student")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_store_error_mapping() {
        assert!(matches!(
            ApiError::from(StoreError::EmailExists),
            ApiError::EmailExists
        ));
        assert!(matches!(
            ApiError::from(StoreError::CourseFull),
            ApiError::CourseFull
        ));
        assert!(matches!(
            ApiError::from(StoreError::StudentNotFound),
            ApiError::NotFound("Student")
        ));
        assert!(matches!(
            ApiError::from(StoreError::CourseNotFound),
            ApiError::NotFound("Course")
        ));
        assert!(matches!(
            ApiError::from(StoreError::RegistrationNotFound),
            ApiError::NotFound("Registration")
        ));
    }

    #[test]
    fn test_field_error_serializes_flat() {
        let detail = FieldError::new("firstName", "firstName is required");
        let json = serde_json::to_value(&detail).unwrap();
        assert_eq!(json["field"], "firstName");
        assert_eq!(json["message"], "firstName is required");
    }
}
