//! HTTP route handlers for the registration API.
//!
//! # Route Structure
//!
//! ```text
//! # Students
//! POST /api/students              - Create student (409 on duplicate email)
//! GET  /api/students/{id}         - Fetch student with registrations
//! GET  /api/students/email/{email} - Fetch student by email
//!
//! # Courses
//! GET  /api/courses               - List active courses
//! GET  /api/courses/{id}          - Fetch course
//!
//! # Registrations
//! POST  /api/registrations                      - Create (joined view, 409 when full)
//! GET   /api/registrations/{id}                 - Fetch joined view
//! PATCH /api/registrations/{id}/status          - Update lifecycle status
//! PATCH /api/registrations/{id}/payment-status  - Update payment progress
//!
//! # Payments
//! POST  /api/payments                       - Create payment record
//! GET   /api/payments/registration/{id}     - Fetch payment for registration
//! PATCH /api/payments/{id}/status           - Update status (+ optional intent id)
//!
//! # Health
//! GET  /api/health                - Liveness check
//! ```

pub mod courses;
pub mod health;
pub mod payments;
pub mod registrations;
pub mod students;

use axum::{
    Router,
    routing::{get, patch, post},
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware;
use crate::state::AppState;

/// Create the student routes router.
pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(students::create))
        .route("/{id}", get(students::show))
        .route("/email/{email}", get(students::show_by_email))
}

/// Create the course routes router.
pub fn course_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(courses::index))
        .route("/{id}", get(courses::show))
}

/// Create the registration routes router.
pub fn registration_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(registrations::create))
        .route("/{id}", get(registrations::show))
        .route("/{id}/status", patch(registrations::update_status))
        .route(
            "/{id}/payment-status",
            patch(registrations::update_payment_status),
        )
}

/// Create the payment routes router.
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(payments::create))
        .route("/registration/{id}", get(payments::show_by_registration))
        .route("/{id}/status", patch(payments::update_status))
}

/// Create all routes for the API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/students", student_routes())
        .nest("/api/courses", course_routes())
        .nest("/api/registrations", registration_routes())
        .nest("/api/payments", payment_routes())
        .route("/api/health", get(health::health))
}

/// Build the full application with its middleware stack.
///
/// The binary adds the Sentry layers on top; everything else (tests
/// included) serves exactly this.
pub fn app(state: AppState) -> Router {
    Router::new()
        .merge(routes())
        .layer(axum::middleware::from_fn(middleware::request_id_middleware))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
