//! Status enums for registrations and payments.
//!
//! All three enums serialize as lowercase strings, matching the wire format
//! of the public API (`"pending"`, `"confirmed"`, ...). Each carries a
//! `VALID` list used by the PATCH endpoints to report the accepted set when
//! rejecting an unknown value.

use serde::{Deserialize, Serialize};

/// Registration lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl RegistrationStatus {
    /// Every accepted wire value, in declaration order.
    pub const VALID: &'static [&'static str] = &["pending", "confirmed", "completed", "cancelled"];

    /// Whether a registration in this status occupies a course seat.
    ///
    /// Cancelled and completed registrations free their seat.
    #[must_use]
    pub const fn counts_against_capacity(self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }
}

impl std::fmt::Display for RegistrationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Confirmed => write!(f, "confirmed"),
            Self::Completed => write!(f, "completed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for RegistrationStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid registration status: {s}")),
        }
    }
}

/// Payment progress as tracked on the registration itself.
///
/// Distinct from [`PaymentStatus`]: this is the coarse per-registration flag
/// the front-end reads, not the state of an individual payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RegistrationPaymentStatus {
    #[default]
    Pending,
    Paid,
    Failed,
}

impl RegistrationPaymentStatus {
    /// Every accepted wire value, in declaration order.
    pub const VALID: &'static [&'static str] = &["pending", "paid", "failed"];
}

impl std::fmt::Display for RegistrationPaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Failed => write!(f, "failed"),
        }
    }
}

impl std::str::FromStr for RegistrationPaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "failed" => Ok(Self::Failed),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

/// Status of an individual payment record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentStatus {
    #[default]
    Pending,
    Succeeded,
    Failed,
    Cancelled,
}

impl PaymentStatus {
    /// Every accepted wire value, in declaration order.
    pub const VALID: &'static [&'static str] = &["pending", "succeeded", "failed", "cancelled"];
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Succeeded => write!(f, "succeeded"),
            Self::Failed => write!(f, "failed"),
            Self::Cancelled => write!(f, "cancelled"),
        }
    }
}

impl std::str::FromStr for PaymentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            "succeeded" => Ok(Self::Succeeded),
            "failed" => Ok(Self::Failed),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(format!("invalid payment status: {s}")),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_pending() {
        assert_eq!(RegistrationStatus::default(), RegistrationStatus::Pending);
        assert_eq!(
            RegistrationPaymentStatus::default(),
            RegistrationPaymentStatus::Pending
        );
        assert_eq!(PaymentStatus::default(), PaymentStatus::Pending);
    }

    #[test]
    fn test_registration_status_roundtrip() {
        for &s in RegistrationStatus::VALID {
            let status: RegistrationStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("unknown".parse::<RegistrationStatus>().is_err());
    }

    #[test]
    fn test_registration_payment_status_roundtrip() {
        for &s in RegistrationPaymentStatus::VALID {
            let status: RegistrationPaymentStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("paid-in-full".parse::<RegistrationPaymentStatus>().is_err());
    }

    #[test]
    fn test_payment_status_roundtrip() {
        for &s in PaymentStatus::VALID {
            let status: PaymentStatus = s.parse().unwrap();
            assert_eq!(status.to_string(), s);
        }
        assert!("succeded".parse::<PaymentStatus>().is_err());
    }

    #[test]
    fn test_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&RegistrationStatus::Confirmed).unwrap(),
            "\"confirmed\""
        );
        let parsed: PaymentStatus = serde_json::from_str("\"succeeded\"").unwrap();
        assert_eq!(parsed, PaymentStatus::Succeeded);
    }

    #[test]
    fn test_counts_against_capacity() {
        assert!(RegistrationStatus::Pending.counts_against_capacity());
        assert!(RegistrationStatus::Confirmed.counts_against_capacity());
        assert!(!RegistrationStatus::Completed.counts_against_capacity());
        assert!(!RegistrationStatus::Cancelled.counts_against_capacity());
    }
}
