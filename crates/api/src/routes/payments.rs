//! Payment route handlers.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use rust_decimal::Decimal;
use serde::Deserialize;
use tracing::instrument;

use elite_driving_core::{PaymentId, PaymentStatus, RegistrationId};

use crate::error::{ApiError, FieldError, Result};
use crate::models::{NewPayment, Payment};
use crate::state::AppState;

/// Request body for creating a payment record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub registration_id: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub stripe_payment_intent_id: Option<String>,
    #[serde(default)]
    pub status: PaymentStatus,
}

fn default_currency() -> String {
    "USD".to_owned()
}

impl CreatePaymentRequest {
    fn validate(&self) -> std::result::Result<(), Vec<FieldError>> {
        let mut details = Vec::new();
        if self.registration_id.trim().is_empty() {
            details.push(FieldError::new(
                "registrationId",
                "registrationId must not be blank",
            ));
        }
        if self.amount.is_sign_negative() {
            details.push(FieldError::new("amount", "amount must not be negative"));
        }
        if details.is_empty() { Ok(()) } else { Err(details) }
    }
}

/// Request body for updating a payment's status.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub stripe_payment_intent_id: Option<String>,
}

/// Create a payment record against an existing registration.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    body: std::result::Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Payment>)> {
    let Json(req) = body.map_err(|rej| ApiError::invalid_body("payment", &rej))?;
    req.validate()
        .map_err(|details| ApiError::validation("Invalid payment data", details))?;

    let registration_id = req
        .registration_id
        .parse()
        .map_err(|_| ApiError::NotFound("Registration"))?;

    let payment = state.store().create_payment(NewPayment {
        registration_id,
        amount: req.amount,
        currency: req.currency,
        stripe_payment_intent_id: req.stripe_payment_intent_id,
        status: req.status,
    })?;
    tracing::info!(payment_id = %payment.id, registration_id = %registration_id, "Payment created");
    Ok((StatusCode::CREATED, Json(payment)))
}

/// Fetch the payment attached to a registration.
pub async fn show_by_registration(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Payment>> {
    let id: RegistrationId = id.parse().map_err(|_| ApiError::NotFound("Payment"))?;

    state
        .store()
        .payment_by_registration(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Payment"))
}

/// Update a payment's status, optionally attaching the external
/// payment-intent identifier.
#[instrument(skip_all)]
pub async fn update_status(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: std::result::Result<Json<UpdatePaymentRequest>, JsonRejection>,
) -> Result<Json<Payment>> {
    let Json(req) = body.map_err(|_| ApiError::BadRequest("Status is required"))?;
    let Some(status) = req.status.filter(|s| !s.is_empty()) else {
        return Err(ApiError::BadRequest("Status is required"));
    };
    let status: PaymentStatus = status
        .parse()
        .map_err(|_| ApiError::invalid_status("Invalid payment status", PaymentStatus::VALID))?;

    let id: PaymentId = id.parse().map_err(|_| ApiError::NotFound("Payment"))?;
    state
        .store()
        .update_payment_status(id, status, req.stripe_payment_intent_id)
        .map(Json)
        .ok_or(ApiError::NotFound("Payment"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_applies_defaults() {
        let req: CreatePaymentRequest = serde_json::from_value(serde_json::json!({
            "registrationId": "r-1",
            "amount": "1200.00"
        }))
        .unwrap();

        assert_eq!(req.currency, "USD");
        assert_eq!(req.status, PaymentStatus::Pending);
        assert!(req.stripe_payment_intent_id.is_none());
        assert_eq!(req.amount.to_string(), "1200.00");
    }

    #[test]
    fn test_create_request_rejects_negative_amount() {
        let req: CreatePaymentRequest = serde_json::from_value(serde_json::json!({
            "registrationId": "r-1",
            "amount": "-5.00"
        }))
        .unwrap();

        let details = req.validate().unwrap_err();
        assert_eq!(details.len(), 1);
        assert_eq!(details.first().unwrap().field, "amount");
    }

    #[test]
    fn test_amount_must_be_a_decimal_string() {
        let result = serde_json::from_value::<CreatePaymentRequest>(serde_json::json!({
            "registrationId": "r-1",
            "amount": "not-a-number"
        }));
        assert!(result.is_err());
    }
}
