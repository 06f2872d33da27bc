//! Tests for the taxonomy repository against a mock connection.

use chrono::{NaiveDate, NaiveDateTime};
use sea_orm::{DatabaseBackend, MockDatabase};

use super::TaxonomyRepository;
use crate::entities::{
    balance_entry_category_type, balance_entry_super_category_type, balance_entry_type,
    balance_fund_type, expenditure_entry_type, expenditure_fund_type, revenue_entry_type,
    revenue_fund_type,
};
use crate::repositories::ledger::BalanceLedger;

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 1, 15)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

fn entry(id: i32, category: i32) -> balance_entry_type::Model {
    balance_entry_type::Model {
        id,
        name: format!("Entry {id}"),
        account_no: format!("{}", 100 + id),
        page: None,
        line: Some("4".to_string()),
        balance_entry_category_type_id_fk: category,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn category(id: i32, super_category: i32) -> balance_entry_category_type::Model {
    balance_entry_category_type::Model {
        id,
        name: format!("Category {id}"),
        balance_entry_super_category_id_fk: super_category,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn super_category(id: i32) -> balance_entry_super_category_type::Model {
    balance_entry_super_category_type::Model {
        id,
        name: "Assets".to_string(),
        date_created: ts(),
        date_updated: ts(),
    }
}

#[tokio::test]
async fn test_entry_types_nest_ancestry() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![entry(1, 10), entry(2, 11), entry(3, 99)]])
        .append_query_results([vec![category(10, 7), category(11, 8)]])
        .append_query_results([vec![super_category(7)]])
        .into_connection();
    let repo = TaxonomyRepository::new(db);

    let nodes = repo.entry_types::<BalanceLedger>().await.unwrap();

    assert_eq!(nodes.len(), 3);

    let full = nodes[0].category.as_ref().expect("category 10");
    assert_eq!(full.id, 10);
    assert_eq!(
        full.super_category.as_ref().map(|s| s.name.as_str()),
        Some("Assets")
    );

    // super category 8 is missing
    let partial = nodes[1].category.as_ref().expect("category 11");
    assert_eq!(partial.name, "Category 11");
    assert!(partial.super_category.is_none());

    // category 99 is missing
    assert_eq!(nodes[2].id, 3);
    assert!(nodes[2].category.is_none());
}

#[tokio::test]
async fn test_all_entry_types_with_empty_tables() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<balance_entry_type::Model>::new()])
        .append_query_results([Vec::<revenue_entry_type::Model>::new()])
        .append_query_results([Vec::<expenditure_entry_type::Model>::new()])
        .into_connection();

    let all = TaxonomyRepository::new(db).all_entry_types().await.unwrap();

    assert!(all.balance_entry_types.is_empty());
    assert!(all.revenue_entry_types.is_empty());
    assert!(all.expenditure_entry_types.is_empty());

    let json = serde_json::to_value(&all).unwrap();
    assert_eq!(json["balance_entry_types"], serde_json::json!([]));
}

#[tokio::test]
async fn test_all_fund_types_per_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![
            balance_fund_type::Model {
                id: 1,
                state_id: "10".to_string(),
                state_name: "General".to_string(),
                date_created: ts(),
                date_updated: ts(),
            },
            balance_fund_type::Model {
                id: 2,
                state_id: "20".to_string(),
                state_name: "Special Revenue".to_string(),
                date_created: ts(),
                date_updated: ts(),
            },
        ]])
        .append_query_results([vec![revenue_fund_type::Model {
            id: 1,
            state_id: "10".to_string(),
            state_name: "General".to_string(),
            date_created: ts(),
            date_updated: ts(),
        }]])
        .append_query_results([Vec::<expenditure_fund_type::Model>::new()])
        .into_connection();

    let all = TaxonomyRepository::new(db).all_fund_types().await.unwrap();

    assert_eq!(all.balance_fund_types.len(), 2);
    assert_eq!(all.balance_fund_types[1].state_name, "Special Revenue");
    assert_eq!(all.revenue_fund_types.len(), 1);
    assert!(all.expenditure_fund_types.is_empty());

    let json = serde_json::to_value(&all).unwrap();
    assert_eq!(
        json["revenue_fund_types"][0],
        serde_json::json!({"id": 1, "state_id": "10", "state_name": "General"})
    );
}
