//! `SeaORM` entity definitions.
//!
//! One module per table of the reporting schema. The service only reads
//! these tables; rows are maintained by the ingestion process.

pub mod balance_entry_category_type;
pub mod balance_entry_super_category_type;
pub mod balance_entry_type;
pub mod balance_fund_type;
pub mod balance_sheet;
pub mod district;
pub mod doe_form;
pub mod expenditure;
pub mod expenditure_entry_category_type;
pub mod expenditure_entry_super_category_type;
pub mod expenditure_entry_type;
pub mod expenditure_fund_type;
pub mod grades;
pub mod revenue;
pub mod revenue_entry_category_type;
pub mod revenue_entry_super_category_type;
pub mod revenue_entry_type;
pub mod revenue_fund_type;
pub mod school;
pub mod school_enrollment;
