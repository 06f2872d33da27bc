//! Finance repository for DOE form reports.

use std::sync::Arc;

use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder};
use schoolfin_core::{
    finance::{DoeForm, DomainLines, FinanceService, FinancialReport},
    lookup::{index_by_key, referenced_keys},
};
use schoolfin_shared::types::{DistrictId, DoeFormId};
use tracing::debug;

use super::ledger::{BalanceLedger, ExpenditureLedger, FinanceLedger, RevenueLedger, find_by_keys};
use crate::entities::doe_form;

/// Error types for finance report operations.
#[derive(Debug, thiserror::Error)]
pub enum FinanceError {
    /// No DOE form for the district and year.
    #[error("Financial report not found for district ID {district_id} and year {year}")]
    ReportNotFound {
        /// Requested district.
        district_id: DistrictId,
        /// Requested year.
        year: i32,
    },

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

/// Finance repository for report queries.
#[derive(Debug)]
pub struct FinanceRepository {
    db: Arc<DatabaseConnection>,
}

impl FinanceRepository {
    /// Creates a new finance repository.
    #[must_use]
    pub fn new(db: impl Into<Arc<DatabaseConnection>>) -> Self {
        Self { db: db.into() }
    }

    /// Finds the DOE form of a district for a year.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn find_doe_form(
        &self,
        district_id: DistrictId,
        year: i32,
    ) -> Result<Option<doe_form::Model>, DbErr> {
        doe_form::Entity::find()
            .filter(doe_form::Column::DistrictIdFk.eq(district_id.into_inner()))
            .filter(doe_form::Column::Year.eq(year))
            .one(self.db.as_ref())
            .await
    }

    /// Loads the lines of one domain for a form, with the entry types and
    /// fund types they reference.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn domain_lines<L: FinanceLedger>(
        &self,
        form_id: DoeFormId,
    ) -> Result<DomainLines, DbErr> {
        let lines: Vec<_> = L::Line::find()
            .filter(L::line_form_column().eq(form_id.into_inner()))
            .order_by_asc(L::line_key())
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(L::line_record)
            .collect();

        let entry_type_ids = referenced_keys(lines.iter().map(|l| l.entry_type_id));
        let fund_type_ids = referenced_keys(lines.iter().map(|l| l.fund_type_id));

        let db = self.db.as_ref();
        let entry_types = find_by_keys::<L::EntryType, _>(db, L::entry_type_key(), entry_type_ids)
            .await?
            .into_iter()
            .map(L::entry_type);
        let fund_types = find_by_keys::<L::FundType, _>(db, L::fund_type_key(), fund_type_ids)
            .await?
            .into_iter()
            .map(L::fund_type);

        debug!(
            domain = %L::DOMAIN,
            form_id = %form_id,
            lines = lines.len(),
            "Loaded form lines"
        );

        Ok(DomainLines {
            lines,
            entry_types: index_by_key(entry_types),
            fund_types: index_by_key(fund_types),
        })
    }

    /// Builds the full financial report of a district for a year.
    ///
    /// # Errors
    ///
    /// Returns `ReportNotFound` if the district has no form for the year,
    /// or an error if a database query fails.
    pub async fn financial_report(
        &self,
        district_id: DistrictId,
        year: i32,
    ) -> Result<FinancialReport, FinanceError> {
        let form = self
            .find_doe_form(district_id, year)
            .await?
            .ok_or(FinanceError::ReportNotFound { district_id, year })?;
        let form_id = DoeFormId::new(form.id);

        let balance = self.domain_lines::<BalanceLedger>(form_id).await?;
        let revenue = self.domain_lines::<RevenueLedger>(form_id).await?;
        let expenditure = self.domain_lines::<ExpenditureLedger>(form_id).await?;

        let report =
            FinanceService::assemble_report(doe_form_view(form), balance, revenue, expenditure);
        debug!(
            %district_id,
            year,
            lines = report.line_count(),
            "Assembled financial report"
        );

        Ok(report)
    }
}

/// Maps a stored form onto its report header.
fn doe_form_view(model: doe_form::Model) -> DoeForm {
    DoeForm {
        id: DoeFormId::new(model.id),
        year: model.year,
        date_created: model.date_created,
        date_updated: model.date_updated,
        district_id: DistrictId::new(model.district_id_fk),
    }
}

#[cfg(test)]
#[path = "finance_tests.rs"]
mod tests;
