//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod enrollment;
pub mod finance;
pub mod ledger;
pub mod taxonomy;

pub use enrollment::{EnrollmentError, EnrollmentRepository};
pub use finance::{FinanceError, FinanceRepository};
pub use ledger::{BalanceLedger, ExpenditureLedger, FinanceLedger, RevenueLedger};
pub use taxonomy::TaxonomyRepository;

#[cfg(test)]
pub(crate) mod test_support;
