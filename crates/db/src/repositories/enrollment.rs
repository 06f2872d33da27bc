//! Enrollment repository for per-school grade counts.

use std::sync::Arc;

use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect,
};
use schoolfin_core::{
    enrollment::{EnrollmentRecord, EnrollmentService, Grade, LatestYear, SchoolEnrollment},
    lookup::{index_by_key, referenced_keys},
};
use schoolfin_shared::types::{GradeId, SchoolId};
use tracing::debug;

use super::ledger::find_by_keys;
use crate::entities::{grades, school_enrollment};

/// Error types for enrollment operations.
#[derive(Debug, thiserror::Error)]
pub enum EnrollmentError {
    /// The school has no enrollment rows in any year.
    #[error("No enrollment data found for this school")]
    NoEnrollmentData(SchoolId),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

#[derive(Debug, FromQueryResult)]
struct MaxYear {
    max_year: Option<i32>,
}

/// Enrollment repository for school queries.
#[derive(Debug)]
pub struct EnrollmentRepository {
    db: Arc<DatabaseConnection>,
}

impl EnrollmentRepository {
    /// Creates a new enrollment repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Lists a school's enrollment rows, optionally for one year only.
    ///
    /// An unknown school or a year without rows yields an empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn school_enrollments(
        &self,
        school_id: SchoolId,
        year: Option<i32>,
    ) -> Result<Vec<SchoolEnrollment>, DbErr> {
        let mut query = school_enrollment::Entity::find()
            .filter(school_enrollment::Column::SchoolIdFk.eq(school_id.into_inner()));
        if let Some(year) = year {
            query = query.filter(school_enrollment::Column::Year.eq(year));
        }

        let rows: Vec<EnrollmentRecord> = query
            .order_by_asc(school_enrollment::Column::Id)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(enrollment_record)
            .collect();

        let grade_ids = referenced_keys(rows.iter().map(|r| r.grade_id.into_inner()));
        let grades =
            find_by_keys::<grades::Entity, _>(self.db.as_ref(), grades::Column::Id, grade_ids)
                .await?
                .into_iter()
                .map(|g| Grade {
                    id: GradeId::new(g.id),
                    name: g.name,
                });

        debug!(%school_id, ?year, rows = rows.len(), "Loaded school enrollment");

        Ok(EnrollmentService::attach_grades(rows, &index_by_key(grades)))
    }

    /// Lists a school's enrollment rows for its most recent year.
    ///
    /// # Errors
    ///
    /// Returns `NoEnrollmentData` if the school has no rows at all, or an
    /// error if a database query fails.
    pub async fn latest_school_enrollments(
        &self,
        school_id: SchoolId,
    ) -> Result<Vec<SchoolEnrollment>, EnrollmentError> {
        let by_school = school_enrollment::Column::SchoolIdFk.eq(school_id.into_inner());

        let row_count = school_enrollment::Entity::find()
            .filter(by_school.clone())
            .count(self.db.as_ref())
            .await?;

        // No history means no maximum to ask for
        let max_year = if row_count == 0 {
            None
        } else {
            school_enrollment::Entity::find()
                .select_only()
                .column_as(school_enrollment::Column::Year.max(), "max_year")
                .filter(by_school)
                .into_model::<MaxYear>()
                .one(self.db.as_ref())
                .await?
                .and_then(|m| m.max_year)
        };

        match EnrollmentService::resolve_latest_year(row_count, max_year) {
            LatestYear::NoHistory => Err(EnrollmentError::NoEnrollmentData(school_id)),
            LatestYear::Unknown => Ok(Vec::new()),
            LatestYear::Year(year) => Ok(self.school_enrollments(school_id, Some(year)).await?),
        }
    }
}

fn enrollment_record(model: school_enrollment::Model) -> EnrollmentRecord {
    EnrollmentRecord {
        id: model.id,
        school_id: SchoolId::new(model.school_id_fk),
        grade_id: GradeId::new(model.grade_id_fk),
        year: model.year,
        enrollment: model.enrollment,
    }
}

#[cfg(test)]
#[path = "enrollment_tests.rs"]
mod tests;
