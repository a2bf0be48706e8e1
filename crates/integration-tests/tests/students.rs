//! Integration tests for student intake and lookup.

use serde_json::{Value, json};
use uuid::Uuid;

use elite_driving_integration_tests::{TestServer, create_student, student_payload};

#[tokio::test]
async fn test_student_round_trip() {
    let server = TestServer::spawn().await;

    let created = create_student(&server, "maria@example.com").await;
    assert_eq!(created["firstName"], "Maria");
    assert_eq!(created["email"], "maria@example.com");
    assert!(created["id"].is_string());
    assert!(created["createdAt"].is_string());

    let id = created["id"].as_str().expect("id is not a string");
    let resp = server
        .client
        .get(server.url(&format!("/api/students/{id}")))
        .send()
        .await
        .expect("Failed to fetch student");
    assert_eq!(resp.status().as_u16(), 200);

    let fetched: Value = resp.json().await.expect("Failed to read student body");
    // Submitted fields come back exactly, with the server-assigned extras.
    assert_eq!(fetched["firstName"], "Maria");
    assert_eq!(fetched["lastName"], "Santos");
    assert_eq!(fetched["phone"], "555-0101");
    assert_eq!(fetched["dateOfBirth"], "1998-03-14");
    assert_eq!(fetched["drivingExperience"], "beginner");
    assert_eq!(fetched["createdAt"], created["createdAt"]);
    // The joined view starts with no registrations.
    assert_eq!(fetched["registrations"], json!([]));
}

#[tokio::test]
async fn test_duplicate_email_is_conflict() {
    let server = TestServer::spawn().await;

    create_student(&server, "maria@example.com").await;

    let resp = server
        .client
        .post(server.url("/api/students"))
        .json(&student_payload("maria@example.com"))
        .send()
        .await
        .expect("Failed to post duplicate student");
    assert_eq!(resp.status().as_u16(), 409);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["code"], "EMAIL_EXISTS");
    assert_eq!(body["error"], "Student with this email already exists");
}

#[tokio::test]
async fn test_invalid_payload_lists_field_errors() {
    let server = TestServer::spawn().await;

    // Structurally complete but semantically blank fields.
    let resp = server
        .client
        .post(server.url("/api/students"))
        .json(&json!({
            "firstName": "",
            "lastName": "Santos",
            "email": "not-an-email",
            "phone": "555-0101",
            "dateOfBirth": "1998-03-14"
        }))
        .send()
        .await
        .expect("Failed to post invalid student");
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid student data");
    let fields: Vec<&str> = body["details"]
        .as_array()
        .expect("details is not an array")
        .iter()
        .map(|d| d["field"].as_str().expect("field is not a string"))
        .collect();
    assert_eq!(fields, vec!["firstName", "email"]);
}

#[tokio::test]
async fn test_missing_required_field_is_bad_request() {
    let server = TestServer::spawn().await;

    let resp = server
        .client
        .post(server.url("/api/students"))
        .json(&json!({ "firstName": "Maria" }))
        .send()
        .await
        .expect("Failed to post incomplete student");
    assert_eq!(resp.status().as_u16(), 400);

    let body: Value = resp.json().await.expect("Failed to read error body");
    assert_eq!(body["error"], "Invalid student data");
    assert!(body["details"].is_array());
}

#[tokio::test]
async fn test_fetch_by_email() {
    let server = TestServer::spawn().await;
    create_student(&server, "maria@example.com").await;

    let resp = server
        .client
        .get(server.url("/api/students/email/maria@example.com"))
        .send()
        .await
        .expect("Failed to fetch student by email");
    assert_eq!(resp.status().as_u16(), 200);

    let body: Value = resp.json().await.expect("Failed to read student body");
    assert_eq!(body["email"], "maria@example.com");
    // The by-email endpoint returns the bare record, no joined list.
    assert!(body.get("registrations").is_none());

    let resp = server
        .client
        .get(server.url("/api/students/email/nobody@example.com"))
        .send()
        .await
        .expect("Failed to fetch unknown email");
    assert_eq!(resp.status().as_u16(), 404);
}

#[tokio::test]
async fn test_unknown_student_is_404() {
    let server = TestServer::spawn().await;

    for id in [Uuid::new_v4().to_string(), "not-a-uuid".to_owned()] {
        let resp = server
            .client
            .get(server.url(&format!("/api/students/{id}")))
            .send()
            .await
            .expect("Failed to fetch student");
        assert_eq!(resp.status().as_u16(), 404);

        let body: Value = resp.json().await.expect("Failed to read error body");
        assert_eq!(body["error"], "Student not found");
    }
}
