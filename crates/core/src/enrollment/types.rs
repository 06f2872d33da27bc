//! Enrollment types.

use schoolfin_shared::types::{GradeId, SchoolId};
use serde::Serialize;

use crate::lookup::Keyed;

/// Grade level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grade {
    /// Grade ID.
    pub id: GradeId,
    /// Display name (e.g. "K", "1", "12").
    pub name: String,
}

impl Keyed for Grade {
    fn key(&self) -> i32 {
        self.id.into_inner()
    }
}

/// Enrollment row as stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrollmentRecord {
    /// Row ID.
    pub id: i32,
    /// School.
    pub school_id: SchoolId,
    /// Grade.
    pub grade_id: GradeId,
    /// School year.
    pub year: i32,
    /// Enrolled students.
    pub enrollment: i32,
}

/// Enrollment row as served, with its grade resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolEnrollment {
    /// Row ID.
    pub id: i32,
    /// School.
    pub school_id: SchoolId,
    /// Grade.
    pub grade_id: GradeId,
    /// School year.
    pub year: i32,
    /// Enrolled students.
    pub enrollment: i32,
    /// Resolved grade, `null` when the reference dangles.
    pub grade: Option<Grade>,
}
