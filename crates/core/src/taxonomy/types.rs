//! Taxonomy types.

use serde::Serialize;

use crate::finance::FundType;
use crate::lookup::Keyed;

/// Top-level grouping of categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SuperCategory {
    /// Super category ID.
    pub id: i32,
    /// Display name.
    pub name: String,
}

impl Keyed for SuperCategory {
    fn key(&self) -> i32 {
        self.id
    }
}

/// Category record as stored (super category by reference).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    /// Category ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Referenced super category.
    pub super_category_id: i32,
}

impl Keyed for Category {
    fn key(&self) -> i32 {
        self.id
    }
}

/// Category with its super category resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    /// Category ID.
    pub id: i32,
    /// Display name.
    pub name: String,
    /// Resolved super category, `null` when the reference dangles.
    pub super_category: Option<SuperCategory>,
}

/// Entry type with its category ancestry resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntryTypeNode {
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
    /// Resolved category, `null` when the reference dangles.
    pub category: Option<CategoryNode>,
}

/// Entry types of every domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllEntryTypes {
    /// Balance sheet entry types.
    pub balance_entry_types: Vec<EntryTypeNode>,
    /// Revenue entry types.
    pub revenue_entry_types: Vec<EntryTypeNode>,
    /// Expenditure entry types.
    pub expenditure_entry_types: Vec<EntryTypeNode>,
}

/// Fund types of every domain.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AllFundTypes {
    /// Balance sheet fund types.
    pub balance_fund_types: Vec<FundType>,
    /// Revenue fund types.
    pub revenue_fund_types: Vec<FundType>,
    /// Expenditure fund types.
    pub expenditure_fund_types: Vec<FundType>,
}
