//! Entry type and fund type aggregation.
//!
//! Entry types are served with their category and super category ancestry
//! nested inline. Fund types are flat.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::TaxonomyService;
pub use types::*;
