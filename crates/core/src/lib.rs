//! Report shaping logic for SchoolFin.
//!
//! This crate contains the pure composition logic with ZERO web or database
//! dependencies. Repositories hand it plain records; it hands back the
//! nested response shapes served by the API.
//!
//! # Modules
//!
//! - `domain` - The three financial domains (balance, revenue, expenditure)
//! - `lookup` - Primary-key indexes used to resolve references
//! - `finance` - DOE form report assembly
//! - `taxonomy` - Entry type and fund type aggregation
//! - `enrollment` - School enrollment shaping and latest-year resolution

pub mod domain;
pub mod enrollment;
pub mod finance;
pub mod lookup;
pub mod taxonomy;

pub use domain::FinanceDomain;
