//! Liveness health check endpoint.

use axum::Json;
use chrono::{SecondsFormat, Utc};
use serde::Serialize;

/// Service name reported by the health endpoint.
const SERVICE_NAME: &str = "Elite Driving Institute API";

/// Health check response body.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub service: &'static str,
}

/// Liveness health check endpoint.
///
/// The store is memory-only, so there are no dependencies to probe.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        service: SERVICE_NAME,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_service_name() {
        let Json(body) = health().await;
        assert_eq!(body.status, "ok");
        assert_eq!(body.service, "Elite Driving Institute API");
        // RFC 3339 with millisecond precision and a Z suffix.
        assert!(body.timestamp.ends_with('Z'));
    }
}
