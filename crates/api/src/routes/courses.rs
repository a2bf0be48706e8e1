//! Course route handlers.

use axum::{
    Json,
    extract::{Path, State},
};

use elite_driving_core::CourseId;

use crate::error::{ApiError, Result};
use crate::models::Course;
use crate::state::AppState;

/// List every active course in the catalog.
pub async fn index(State(state): State<AppState>) -> Json<Vec<Course>> {
    Json(state.store().active_courses())
}

/// Fetch a single course, active or not.
pub async fn show(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Course>> {
    let id: CourseId = id.parse().map_err(|_| ApiError::NotFound("Course"))?;

    state
        .store()
        .course(id)
        .map(Json)
        .ok_or(ApiError::NotFound("Course"))
}
