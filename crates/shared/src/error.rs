//! Application-wide error types.

use thiserror::Error;

/// Application error types.
///
/// Only `NotFound` and `Validation` are client-visible outcomes; the other
/// variants are reported as a generic server failure.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error (malformed or missing request parameters).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::Validation(_) => 400,
            Self::Database(_) | Self::Internal(_) => 500,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_ERROR",
            Self::Database(_) => "DATABASE_ERROR",
            Self::Internal(_) => "INTERNAL_ERROR",
        }
    }

    /// Returns the message safe to show to API clients.
    ///
    /// Server-side failures are collapsed into a generic message so that
    /// storage details never leak into responses.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::NotFound(msg) | Self::Validation(msg) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => "An error occurred".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(AppError::NotFound(String::new()), 404, "NOT_FOUND")]
    #[case(AppError::Validation(String::new()), 400, "VALIDATION_ERROR")]
    #[case(AppError::Database(String::new()), 500, "DATABASE_ERROR")]
    #[case(AppError::Internal(String::new()), 500, "INTERNAL_ERROR")]
    fn test_status_and_error_codes(
        #[case] error: AppError,
        #[case] status: u16,
        #[case] code: &str,
    ) {
        assert_eq!(error.status_code(), status);
        assert_eq!(error.error_code(), code);
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            AppError::NotFound("msg".into()).to_string(),
            "Not found: msg"
        );
        assert_eq!(
            AppError::Validation("msg".into()).to_string(),
            "Validation error: msg"
        );
        assert_eq!(
            AppError::Database("msg".into()).to_string(),
            "Database error: msg"
        );
        assert_eq!(
            AppError::Internal("msg".into()).to_string(),
            "Internal error: msg"
        );
    }

    #[test]
    fn test_public_message_hides_server_failures() {
        assert_eq!(
            AppError::NotFound("No enrollment data found for this school".into()).public_message(),
            "No enrollment data found for this school"
        );
        assert_eq!(
            AppError::Database("connection refused on 10.0.0.3".into()).public_message(),
            "An error occurred"
        );
        assert_eq!(
            AppError::Internal("boom".into()).public_message(),
            "An error occurred"
        );
    }
}
