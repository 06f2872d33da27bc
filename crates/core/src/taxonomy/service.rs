//! Taxonomy aggregation service.

use std::collections::HashMap;

use super::types::{Category, CategoryNode, EntryTypeNode, SuperCategory};
use crate::finance::EntryType;
use crate::lookup::resolve;

/// Service for shaping entry type hierarchies.
pub struct TaxonomyService;

impl TaxonomyService {
    /// Nests each entry type's category and super category.
    ///
    /// Resolution is independent per entry type: a dangling category or
    /// super category only blanks that one entry's ancestry.
    #[must_use]
    pub fn build_entry_types(
        entry_types: Vec<EntryType>,
        categories: &HashMap<i32, Category>,
        super_categories: &HashMap<i32, SuperCategory>,
    ) -> Vec<EntryTypeNode> {
        entry_types
            .into_iter()
            .map(|et| EntryTypeNode {
                category: categories
                    .get(&et.category_id)
                    .map(|c| Self::category_node(c, super_categories)),
                id: et.id,
                name: et.name,
                account_no: et.account_no,
                page: et.page,
                line: et.line,
            })
            .collect()
    }

    fn category_node(
        category: &Category,
        super_categories: &HashMap<i32, SuperCategory>,
    ) -> CategoryNode {
        CategoryNode {
            id: category.id,
            name: category.name.clone(),
            super_category: resolve(super_categories, category.super_category_id),
        }
    }
}
