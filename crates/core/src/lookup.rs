//! Primary-key indexes for reference resolution.
//!
//! Repositories fetch referenced rows in one `id IN (...)` query per table and
//! index them here. A reference missing from the index is a dangling foreign
//! key and resolves to `None`.

use std::collections::{BTreeSet, HashMap};

/// A record addressable by its integer primary key.
pub trait Keyed {
    /// Returns the primary key.
    fn key(&self) -> i32;
}

/// Indexes records by primary key.
#[must_use]
pub fn index_by_key<T: Keyed>(records: impl IntoIterator<Item = T>) -> HashMap<i32, T> {
    records.into_iter().map(|r| (r.key(), r)).collect()
}

/// Collects the distinct referenced keys in ascending order.
///
/// The ordering keeps generated `IN` lists stable across identical requests.
#[must_use]
pub fn referenced_keys(keys: impl IntoIterator<Item = i32>) -> Vec<i32> {
    keys.into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Resolves a reference against an index, cloning the record if present.
#[must_use]
pub fn resolve<T: Clone>(index: &HashMap<i32, T>, key: i32) -> Option<T> {
    index.get(&key).cloned()
}
