//! Finance report and taxonomy routes.

use axum::{Json, Router, extract::State, routing::get};
use serde::Deserialize;

use crate::{AppState, error::ApiError, extractors::ValidQuery};
use schoolfin_core::{
    finance::FinancialReport,
    taxonomy::{AllEntryTypes, AllFundTypes},
};
use schoolfin_db::{FinanceRepository, TaxonomyRepository};
use schoolfin_shared::types::DistrictId;

/// Creates the finance routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/finance/report", get(get_financial_report))
        .route("/finance/entry-types", get(get_entry_types))
        .route("/finance/fund-types", get(get_fund_types))
}

/// Query parameters for a financial report.
#[derive(Debug, Deserialize)]
pub struct ReportQuery {
    /// District the form belongs to.
    pub district_id: DistrictId,
    /// Fiscal year of the form.
    pub year: i32,
}

/// GET `/finance/report` - DOE form with all its decorated lines.
async fn get_financial_report(
    State(state): State<AppState>,
    ValidQuery(query): ValidQuery<ReportQuery>,
) -> Result<Json<FinancialReport>, ApiError> {
    let repo = FinanceRepository::new(state.db.clone());
    let report = repo.financial_report(query.district_id, query.year).await?;
    Ok(Json(report))
}

/// GET `/finance/entry-types` - Entry types of every domain.
async fn get_entry_types(State(state): State<AppState>) -> Result<Json<AllEntryTypes>, ApiError> {
    let repo = TaxonomyRepository::new(state.db.clone());
    Ok(Json(repo.all_entry_types().await?))
}

/// GET `/finance/fund-types` - Fund types of every domain.
async fn get_fund_types(State(state): State<AppState>) -> Result<Json<AllFundTypes>, ApiError> {
    let repo = TaxonomyRepository::new(state.db.clone());
    Ok(Json(repo.all_fund_types().await?))
}
