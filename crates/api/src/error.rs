//! Error-to-response mapping.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use tracing::{error, warn};

use schoolfin_core::finance::FinanceService;
use schoolfin_db::repositories::{EnrollmentError, FinanceError};
use schoolfin_shared::AppError;

/// An [`AppError`] rendered as `{"error", "message"}` JSON.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl ApiError {
    /// Rejects a malformed request parameter.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self(AppError::Validation(message.into()))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        (
            status,
            Json(json!({
                "error": self.0.error_code().to_lowercase(),
                "message": self.0.public_message(),
            })),
        )
            .into_response()
    }
}

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<DbErr> for ApiError {
    fn from(err: DbErr) -> Self {
        error!(error = %err, "Database query failed");
        Self(AppError::Database(err.to_string()))
    }
}

impl From<FinanceError> for ApiError {
    fn from(err: FinanceError) -> Self {
        match err {
            FinanceError::ReportNotFound { district_id, year } => {
                warn!(%district_id, year, "No DOE form for district and year");
                Self(AppError::NotFound(FinanceService::not_found_message(
                    district_id,
                    year,
                )))
            }
            FinanceError::Database(db) => db.into(),
        }
    }
}

impl From<EnrollmentError> for ApiError {
    fn from(err: EnrollmentError) -> Self {
        match err {
            EnrollmentError::NoEnrollmentData(school_id) => {
                warn!(%school_id, "No enrollment history for school");
                Self(AppError::NotFound(err.to_string()))
            }
            EnrollmentError::Database(db) => db.into(),
        }
    }
}
