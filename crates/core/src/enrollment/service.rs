//! Enrollment shaping service.

use std::collections::HashMap;

use super::types::{EnrollmentRecord, Grade, SchoolEnrollment};
use crate::lookup::resolve;

/// Message returned when a school has no enrollment history at all.
pub const NO_ENROLLMENT_DATA: &str = "No enrollment data found for this school";

/// Outcome of the latest-year lookup for a school.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LatestYear {
    /// The school has no enrollment rows.
    NoHistory,
    /// Rows exist but no maximum year was reported.
    Unknown,
    /// Most recent year with rows.
    Year(i32),
}

/// Service for shaping enrollment rows.
pub struct EnrollmentService;

impl EnrollmentService {
    /// Attaches each row's grade. Row order is preserved.
    #[must_use]
    pub fn attach_grades(
        rows: Vec<EnrollmentRecord>,
        grades: &HashMap<i32, Grade>,
    ) -> Vec<SchoolEnrollment> {
        rows.into_iter()
            .map(|row| SchoolEnrollment {
                grade: resolve(grades, row.grade_id.into_inner()),
                id: row.id,
                school_id: row.school_id,
                grade_id: row.grade_id,
                year: row.year,
                enrollment: row.enrollment,
            })
            .collect()
    }

    /// Combines the row count and maximum year of a school's history.
    ///
    /// `Unknown` only happens when the store reports rows but no maximum;
    /// callers answer it with an empty list.
    #[must_use]
    pub const fn resolve_latest_year(row_count: u64, max_year: Option<i32>) -> LatestYear {
        match (row_count, max_year) {
            (0, _) => LatestYear::NoHistory,
            (_, None) => LatestYear::Unknown,
            (_, Some(year)) => LatestYear::Year(year),
        }
    }
}
