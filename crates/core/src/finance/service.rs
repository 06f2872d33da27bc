//! Report assembly service.

use std::collections::HashMap;

use schoolfin_shared::types::DistrictId;

use super::types::{DoeForm, EntryType, FinancialLine, FinancialReport, FundType, LineRecord};
use crate::lookup::resolve;

/// Lines of one domain together with the references they point to.
#[derive(Debug, Clone, Default)]
pub struct DomainLines {
    /// Lines in storage order.
    pub lines: Vec<LineRecord>,
    /// Entry types referenced by the lines, by ID.
    pub entry_types: HashMap<i32, EntryType>,
    /// Fund types referenced by the lines, by ID.
    pub fund_types: HashMap<i32, FundType>,
}

impl DomainLines {
    /// Decorates the lines with their resolved references.
    #[must_use]
    pub fn decorate(self) -> Vec<FinancialLine> {
        FinanceService::decorate_lines(self.lines, &self.entry_types, &self.fund_types)
    }
}

/// Service for assembling financial reports.
pub struct FinanceService;

impl FinanceService {
    /// Decorates lines with their entry type and fund type.
    ///
    /// Line order is preserved. A reference missing from its index leaves
    /// the nested field `None`; it never fails the batch.
    #[must_use]
    pub fn decorate_lines(
        lines: Vec<LineRecord>,
        entry_types: &HashMap<i32, EntryType>,
        fund_types: &HashMap<i32, FundType>,
    ) -> Vec<FinancialLine> {
        lines
            .into_iter()
            .map(|line| FinancialLine {
                entry_type: resolve(entry_types, line.entry_type_id),
                fund_type: resolve(fund_types, line.fund_type_id),
                id: line.id,
                value: line.value,
                entry_type_id: line.entry_type_id,
                fund_type_id: line.fund_type_id,
            })
            .collect()
    }

    /// Assembles a report from a form and the lines of each domain.
    #[must_use]
    pub fn assemble_report(
        doe_form: DoeForm,
        balance: DomainLines,
        revenue: DomainLines,
        expenditure: DomainLines,
    ) -> FinancialReport {
        FinancialReport {
            doe_form,
            balance_sheets: balance.decorate(),
            revenues: revenue.decorate(),
            expenditures: expenditure.decorate(),
        }
    }

    /// Formats the not-found message for a district and year.
    #[must_use]
    pub fn not_found_message(district_id: DistrictId, year: i32) -> String {
        format!("Financial report not found for district ID {district_id} and year {year}")
    }
}
