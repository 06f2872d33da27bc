//! Tests for taxonomy aggregation.

use proptest::prelude::*;
use rstest::rstest;

use super::service::TaxonomyService;
use super::types::{AllEntryTypes, AllFundTypes, Category, SuperCategory};
use crate::finance::{EntryType, FundType};
use crate::lookup::index_by_key;

fn entry_type(id: i32, category_id: i32) -> EntryType {
    EntryType {
        id,
        name: format!("Entry {id}"),
        account_no: format!("A-{id}"),
        page: None,
        line: Some(format!("{id}")),
        category_id,
    }
}

fn category(id: i32, super_category_id: i32) -> Category {
    Category {
        id,
        name: format!("Category {id}"),
        super_category_id,
    }
}

fn super_category(id: i32) -> SuperCategory {
    SuperCategory {
        id,
        name: format!("Super {id}"),
    }
}

#[test]
fn test_full_ancestry_is_nested() {
    let nodes = TaxonomyService::build_entry_types(
        vec![entry_type(1, 10)],
        &index_by_key([category(10, 100)]),
        &index_by_key([super_category(100)]),
    );

    let category = nodes[0].category.as_ref().expect("category resolved");
    assert_eq!(category.id, 10);
    assert_eq!(category.name, "Category 10");
    assert_eq!(category.super_category, Some(super_category(100)));
    assert_eq!(nodes[0].line.as_deref(), Some("1"));
}

#[rstest]
#[case::dangling_category(99, 100, false, false)]
#[case::dangling_super_category(10, 999, true, false)]
#[case::resolved(10, 100, true, true)]
fn test_dangling_ancestry_is_omitted(
    #[case] category_ref: i32,
    #[case] super_ref: i32,
    #[case] has_category: bool,
    #[case] has_super: bool,
) {
    let nodes = TaxonomyService::build_entry_types(
        vec![entry_type(1, category_ref)],
        &index_by_key([category(10, super_ref)]),
        &index_by_key([super_category(100)]),
    );

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].category.is_some(), has_category);
    assert_eq!(
        nodes[0]
            .category
            .as_ref()
            .is_some_and(|c| c.super_category.is_some()),
        has_super
    );
}

#[test]
fn test_dangling_reference_does_not_affect_siblings() {
    let nodes = TaxonomyService::build_entry_types(
        vec![entry_type(1, 10), entry_type(2, 404), entry_type(3, 10)],
        &index_by_key([category(10, 100)]),
        &index_by_key([super_category(100)]),
    );

    assert!(nodes[0].category.is_some());
    assert!(nodes[1].category.is_none());
    assert!(nodes[2].category.is_some());
}

#[test]
fn test_entry_types_json_shape() {
    let all = AllEntryTypes {
        balance_entry_types: TaxonomyService::build_entry_types(
            vec![entry_type(1, 10)],
            &index_by_key([category(10, 100)]),
            &std::collections::HashMap::new(),
        ),
        ..AllEntryTypes::default()
    };

    let json = serde_json::to_value(&all).unwrap();
    let first = &json["balance_entry_types"][0];
    assert_eq!(first["account_no"], "A-1");
    assert_eq!(first["category"]["name"], "Category 10");
    assert_eq!(first["category"]["super_category"], serde_json::Value::Null);
    assert!(first.get("category_id").is_none());
    assert_eq!(json["revenue_entry_types"], serde_json::json!([]));
    assert_eq!(json["expenditure_entry_types"], serde_json::json!([]));
}

#[test]
fn test_fund_types_json_shape() {
    let all = AllFundTypes {
        revenue_fund_types: vec![FundType {
            id: 4,
            state_id: "10".to_string(),
            state_name: "General Fund".to_string(),
        }],
        ..AllFundTypes::default()
    };

    let json = serde_json::to_value(&all).unwrap();
    assert_eq!(json["balance_fund_types"], serde_json::json!([]));
    assert_eq!(
        json["revenue_fund_types"][0],
        serde_json::json!({"id": 4, "state_id": "10", "state_name": "General Fund"})
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Every entry type comes out exactly once, in input order.
    #[test]
    fn prop_entry_types_preserved(
        refs in prop::collection::vec(1i32..=6, 0..30),
        known in prop::collection::btree_set(1i32..=6, 0..6),
    ) {
        let entry_types: Vec<EntryType> = refs
            .iter()
            .enumerate()
            .map(|(i, c)| entry_type(i32::try_from(i).unwrap(), *c))
            .collect();
        let categories = index_by_key(known.iter().map(|id| category(*id, 1)));

        let nodes = TaxonomyService::build_entry_types(
            entry_types.clone(),
            &categories,
            &index_by_key([super_category(1)]),
        );

        prop_assert_eq!(nodes.len(), entry_types.len());
        for (node, input) in nodes.iter().zip(&entry_types) {
            prop_assert_eq!(node.id, input.id);
            prop_assert_eq!(node.category.is_some(), known.contains(&input.category_id));
        }
    }
}
