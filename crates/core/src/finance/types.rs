//! Finance report types.

use chrono::NaiveDateTime;
use rust_decimal::Decimal;
use schoolfin_shared::types::{DistrictId, DoeFormId};
use serde::Serialize;

use crate::lookup::Keyed;

/// DOE form header as served in a report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DoeForm {
    /// Form ID.
    pub id: DoeFormId,
    /// Fiscal year of the submission.
    pub year: i32,
    /// Creation timestamp.
    pub date_created: NaiveDateTime,
    /// Last update timestamp.
    pub date_updated: NaiveDateTime,
    /// Owning district.
    pub district_id: DistrictId,
}

/// A monetary line of a DOE form before decoration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineRecord {
    /// Line ID.
    pub id: i32,
    /// Reported value, if any.
    pub value: Option<Decimal>,
    /// Referenced entry type of the same domain.
    pub entry_type_id: i32,
    /// Referenced fund type of the same domain.
    pub fund_type_id: i32,
}

/// Entry type record (flat, category by reference).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryType {
    /// Entry type ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Account number.
    pub account_no: String,
    /// Page locator on the paper form.
    pub page: Option<String>,
    /// Line locator on the paper form.
    pub line: Option<String>,
    /// Referenced category.
    pub category_id: i32,
}

impl Keyed for EntryType {
    fn key(&self) -> i32 {
        self.id
    }
}

/// State-assigned fund classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FundType {
    /// Fund type ID.
    pub id: i32,
    /// State fund code.
    pub state_id: String,
    /// State fund name.
    pub state_name: String,
}

impl Keyed for FundType {
    fn key(&self) -> i32 {
        self.id
    }
}

/// A decorated report line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialLine {
    /// Line ID.
    pub id: i32,
    /// Reported value, serialized as a JSON number.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub value: Option<Decimal>,
    /// Referenced entry type ID.
    pub entry_type_id: i32,
    /// Referenced fund type ID.
    pub fund_type_id: i32,
    /// Resolved entry type, `null` when the reference dangles.
    pub entry_type: Option<EntryType>,
    /// Resolved fund type, `null` when the reference dangles.
    pub fund_type: Option<FundType>,
}

/// Full financial report for one district and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinancialReport {
    /// Form header.
    pub doe_form: DoeForm,
    /// Balance sheet lines.
    pub balance_sheets: Vec<FinancialLine>,
    /// Revenue lines.
    pub revenues: Vec<FinancialLine>,
    /// Expenditure lines.
    pub expenditures: Vec<FinancialLine>,
}

impl FinancialReport {
    /// Total number of lines across all domains.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.balance_sheets.len() + self.revenues.len() + self.expenditures.len()
    }
}
