//! Course domain types.

use elite_driving_core::CourseId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A course in the catalog.
///
/// `is_active` is a 1/0 flag rather than a bool, mirroring the wire format
/// the front-end was built against.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: CourseId,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub course_type: String,
    pub duration: String,
    pub capacity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub features: Vec<String>,
    pub is_active: i32,
}

/// Input for creating a course.
///
/// Courses are seeded at process start and managed through the store; there
/// is no public creation endpoint.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewCourse {
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub course_type: String,
    pub duration: String,
    pub capacity: u32,
    #[serde(with = "rust_decimal::serde::str")]
    pub price: Decimal,
    pub features: Vec<String>,
    #[serde(default = "default_is_active")]
    pub is_active: i32,
}

const fn default_is_active() -> i32 {
    1
}

/// Partial update for a course; `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct CoursePatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub course_type: Option<String>,
    pub duration: Option<String>,
    pub capacity: Option<u32>,
    pub price: Option<Decimal>,
    pub features: Option<Vec<String>>,
    pub is_active: Option<i32>,
}
