//! Financial domains.

/// One of the three independent financial domains of a DOE form.
///
/// Every domain has its own lines, entry types, categories, super categories
/// and fund types; nothing is shared across domains.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FinanceDomain {
    /// Balance sheet.
    Balance,
    /// Revenues.
    Revenue,
    /// Expenditures.
    Expenditure,
}

impl FinanceDomain {
    /// Returns the domain name used in table names and logs.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Balance => "balance",
            Self::Revenue => "revenue",
            Self::Expenditure => "expenditure",
        }
    }
}

impl std::fmt::Display for FinanceDomain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
