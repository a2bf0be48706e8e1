//! Payment record types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use elite_driving_core::{PaymentId, PaymentStatus, RegistrationId};

/// A payment record attached to a registration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    pub id: PaymentId,
    pub registration_id: RegistrationId,
    #[serde(with = "rust_decimal::serde::str")]
    pub amount: Decimal,
    pub currency: String,
    pub stripe_payment_intent_id: Option<String>,
    pub status: PaymentStatus,
    pub created_at: DateTime<Utc>,
}

/// Input for creating a payment record.
#[derive(Debug, Clone)]
pub struct NewPayment {
    pub registration_id: RegistrationId,
    pub amount: Decimal,
    pub currency: String,
    pub stripe_payment_intent_id: Option<String>,
    pub status: PaymentStatus,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_payment_serializes_amount_as_string() {
        let payment = Payment {
            id: PaymentId::generate(),
            registration_id: RegistrationId::generate(),
            amount: Decimal::new(250_000, 2),
            currency: "USD".to_owned(),
            stripe_payment_intent_id: None,
            status: PaymentStatus::Pending,
            created_at: Utc::now(),
        };

        let json = serde_json::to_value(&payment).unwrap();
        assert_eq!(json["amount"], "2500.00");
        assert_eq!(json["currency"], "USD");
        assert_eq!(json["status"], "pending");
        assert!(json["stripePaymentIntentId"].is_null());
    }
}
