//! Payment store operations.

use chrono::Utc;

use elite_driving_core::{PaymentId, PaymentStatus, RegistrationId};

use super::{Store, StoreError};
use crate::models::{NewPayment, Payment};

impl Store {
    /// Create a payment record against an existing registration.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::RegistrationNotFound`] when the referenced
    /// registration does not resolve.
    pub fn create_payment(&self, new: NewPayment) -> Result<Payment, StoreError> {
        let mut tables = self.write();

        if !tables.registrations.contains_key(&new.registration_id) {
            return Err(StoreError::RegistrationNotFound);
        }

        let payment = Payment {
            id: PaymentId::generate(),
            registration_id: new.registration_id,
            amount: new.amount,
            currency: new.currency,
            stripe_payment_intent_id: new.stripe_payment_intent_id,
            status: new.status,
            created_at: Utc::now(),
        };
        tables.payments.insert(payment.id, payment.clone());
        Ok(payment)
    }

    /// Fetch a payment by id.
    #[must_use]
    pub fn payment(&self, id: PaymentId) -> Option<Payment> {
        self.read().payments.get(&id).cloned()
    }

    /// Fetch the payment attached to a registration.
    ///
    /// Callers treat the relation as at-most-one; uniqueness is not enforced
    /// at creation, and if several payments exist an arbitrary one is
    /// returned.
    #[must_use]
    pub fn payment_by_registration(&self, registration_id: RegistrationId) -> Option<Payment> {
        self.read()
            .payments
            .values()
            .find(|p| p.registration_id == registration_id)
            .cloned()
    }

    /// Set a payment's status and, when provided, its external payment-intent
    /// identifier. An absent identifier leaves the stored one unchanged.
    /// Returns `None` if the payment does not exist.
    #[must_use]
    pub fn update_payment_status(
        &self,
        id: PaymentId,
        status: PaymentStatus,
        stripe_payment_intent_id: Option<String>,
    ) -> Option<Payment> {
        let mut tables = self.write();
        let payment = tables.payments.get_mut(&id)?;

        payment.status = status;
        if let Some(intent_id) = stripe_payment_intent_id {
            payment.stripe_payment_intent_id = Some(intent_id);
        }

        Some(payment.clone())
    }
}
