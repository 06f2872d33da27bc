//! School enrollment routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use crate::{
    AppState,
    error::ApiError,
    extractors::{ValidPath, ValidQuery},
};
use schoolfin_core::enrollment::SchoolEnrollment;
use schoolfin_db::EnrollmentRepository;
use schoolfin_shared::types::SchoolId;

/// Creates the enrollment routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/enrollment/schools/{school_id}",
            get(get_school_enrollments),
        )
        .route(
            "/enrollment/schools/{school_id}/latest",
            get(get_latest_school_enrollments),
        )
}

/// Query parameters for school enrollment.
#[derive(Debug, Deserialize)]
pub struct EnrollmentQuery {
    /// Restrict to one school year.
    pub year: Option<i32>,
}

/// GET `/enrollment/schools/{school_id}` - Enrollment rows, all years or one.
async fn get_school_enrollments(
    State(state): State<AppState>,
    ValidPath(school_id): ValidPath<SchoolId>,
    ValidQuery(query): ValidQuery<EnrollmentQuery>,
) -> Result<Json<Vec<SchoolEnrollment>>, ApiError> {
    let repo = EnrollmentRepository::new(state.db.clone());
    Ok(Json(repo.school_enrollments(school_id, query.year).await?))
}

/// GET `/enrollment/schools/{school_id}/latest` - Rows of the most recent year.
async fn get_latest_school_enrollments(
    State(state): State<AppState>,
    ValidPath(school_id): ValidPath<SchoolId>,
) -> Result<Json<Vec<SchoolEnrollment>>, ApiError> {
    let repo = EnrollmentRepository::new(state.db.clone());
    Ok(Json(repo.latest_school_enrollments(school_id).await?))
}
