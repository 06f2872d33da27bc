//! DOE form financial report assembly.
//!
//! A report is one DOE form plus its balance sheet, revenue and expenditure
//! lines, each line decorated with its entry type and fund type.

pub mod service;
pub mod types;


pub use service::{DomainLines, FinanceService};
pub use types::*;
