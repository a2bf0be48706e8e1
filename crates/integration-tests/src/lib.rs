//! Integration tests for the Elite Driving Institute API.
//!
//! The store is memory-only, so the tests need no external services: each
//! test boots the full application in-process on an ephemeral port and
//! drives it over HTTP with `reqwest`.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p elite-driving-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `health` - Liveness endpoint
//! - `students` - Intake, duplicate emails, joined student view
//! - `courses` - Seeded catalog listing and lookup
//! - `registrations` - Capacity enforcement and status updates
//! - `payments` - Payment records and status updates

use reqwest::Client;
use serde_json::{Value, json};

use elite_driving_api::config::ApiConfig;
use elite_driving_api::routes;
use elite_driving_api::state::AppState;
use elite_driving_api::store::Store;

/// A freshly booted API server with its own seeded store.
pub struct TestServer {
    pub base_url: String,
    pub client: Client,
}

impl TestServer {
    /// Boot the application on an ephemeral loopback port.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot bind; tests cannot proceed without it.
    pub async fn spawn() -> Self {
        let state = AppState::new(ApiConfig::default(), Store::new());
        let app = routes::app(state);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local addr");

        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("Test server error");
        });

        Self {
            base_url: format!("http://{addr}"),
            client: Client::new(),
        }
    }

    /// Absolute URL for an API path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// A complete, valid student creation payload with the given email.
#[must_use]
pub fn student_payload(email: &str) -> Value {
    json!({
        "firstName": "Maria",
        "lastName": "Santos",
        "email": email,
        "phone": "555-0101",
        "dateOfBirth": "1998-03-14",
        "drivingExperience": "beginner"
    })
}

/// Create a student via the API and return the response body.
///
/// # Panics
///
/// Panics if the API does not answer 201.
pub async fn create_student(server: &TestServer, email: &str) -> Value {
    let resp = server
        .client
        .post(server.url("/api/students"))
        .json(&student_payload(email))
        .send()
        .await
        .expect("Failed to create student");
    assert_eq!(resp.status().as_u16(), 201);
    resp.json().await.expect("Failed to read student body")
}

/// Look up a seeded course id by its title.
///
/// # Panics
///
/// Panics if the catalog does not carry the title.
pub async fn course_id_by_title(server: &TestServer, title: &str) -> String {
    let courses: Value = server
        .client
        .get(server.url("/api/courses"))
        .send()
        .await
        .expect("Failed to list courses")
        .json()
        .await
        .expect("Failed to read course list");

    courses
        .as_array()
        .expect("Course list is not an array")
        .iter()
        .find(|c| c["title"] == title)
        .unwrap_or_else(|| panic!("No course titled {title}"))["id"]
        .as_str()
        .expect("Course id is not a string")
        .to_owned()
}

/// Create a registration via the API and return the response body.
///
/// # Panics
///
/// Panics if the API does not answer 201.
pub async fn create_registration(
    server: &TestServer,
    student_id: &str,
    course_id: &str,
) -> Value {
    let resp = server
        .client
        .post(server.url("/api/registrations"))
        .json(&json!({ "studentId": student_id, "courseId": course_id }))
        .send()
        .await
        .expect("Failed to create registration");
    assert_eq!(resp.status().as_u16(), 201);
    resp.json().await.expect("Failed to read registration body")
}
