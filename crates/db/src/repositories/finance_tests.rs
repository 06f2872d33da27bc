//! Tests for the finance repository against a mock connection.
//!
//! Mock result sets are consumed in query order: form, then for each domain
//! lines, entry types, fund types. A domain without lines issues no lookups.

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};
use rust_decimal_macros::dec;
use sea_orm::{DatabaseBackend, DatabaseConnection, MockDatabase, Value};
use schoolfin_shared::types::{DistrictId, DoeFormId};

use super::{FinanceError, FinanceRepository};
use crate::repositories::ledger::RevenueLedger;
use crate::repositories::test_support::{bound_values, logged_statements};
use crate::entities::{
    balance_entry_type, balance_fund_type, balance_sheet, doe_form, expenditure, revenue,
    revenue_entry_type, revenue_fund_type,
};

fn ts() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 9, 30)
        .unwrap()
        .and_hms_opt(8, 0, 0)
        .unwrap()
}

fn form() -> doe_form::Model {
    doe_form::Model {
        id: 5,
        district_id_fk: 12,
        year: 2023,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn balance_line(id: i32, entry: i32, fund: i32) -> balance_sheet::Model {
    balance_sheet::Model {
        id,
        doe_form_id_fk: 5,
        balance_entry_type_id_fk: entry,
        balance_fund_type_id_fk: fund,
        value: Some(dec!(100.25)),
        date_created: ts(),
        date_updated: ts(),
    }
}

fn balance_entry(id: i32) -> balance_entry_type::Model {
    balance_entry_type::Model {
        id,
        name: "Cash".to_string(),
        account_no: "101".to_string(),
        page: Some("2".to_string()),
        line: Some("1".to_string()),
        balance_entry_category_type_id_fk: 1,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn balance_fund(id: i32) -> balance_fund_type::Model {
    balance_fund_type::Model {
        id,
        state_id: "10".to_string(),
        state_name: "General".to_string(),
        date_created: ts(),
        date_updated: ts(),
    }
}

fn revenue_line(id: i32, entry: i32, fund: i32) -> revenue::Model {
    revenue::Model {
        id,
        doe_form_id_fk: 5,
        revenue_entry_type_id_fk: entry,
        revenue_fund_type_id_fk: fund,
        value: None,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn revenue_entry(id: i32) -> revenue_entry_type::Model {
    revenue_entry_type::Model {
        id,
        name: "Property Taxes".to_string(),
        account_no: "1110".to_string(),
        page: None,
        line: None,
        revenue_entry_category_type_id_fk: 3,
        date_created: ts(),
        date_updated: ts(),
    }
}

fn revenue_fund(id: i32) -> revenue_fund_type::Model {
    revenue_fund_type::Model {
        id,
        state_id: "20".to_string(),
        state_name: "Special Revenue".to_string(),
        date_created: ts(),
        date_updated: ts(),
    }
}

fn no_forms() -> DatabaseConnection {
    MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([Vec::<doe_form::Model>::new()])
        .into_connection()
}

#[tokio::test]
async fn test_missing_form_is_not_found() {
    let repo = FinanceRepository::new(no_forms());

    let err = repo
        .financial_report(DistrictId::new(12), 1999)
        .await
        .expect_err("no form for 1999");

    assert!(matches!(
        err,
        FinanceError::ReportNotFound { district_id, year: 1999 } if district_id == DistrictId::new(12)
    ));
    assert_eq!(
        err.to_string(),
        "Financial report not found for district ID 12 and year 1999"
    );
}

#[tokio::test]
async fn test_report_decorates_lines_per_domain() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![form()]])
        // balance: two lines, entry type 2 dangles
        .append_query_results([vec![balance_line(1, 1, 7), balance_line(2, 2, 7)]])
        .append_query_results([vec![balance_entry(1)]])
        .append_query_results([vec![balance_fund(7)]])
        // revenue: one line, fund type dangles
        .append_query_results([vec![revenue_line(10, 4, 99)]])
        .append_query_results([vec![revenue_entry(4)]])
        .append_query_results([Vec::<revenue_fund_type::Model>::new()])
        // expenditure: no lines, no lookups
        .append_query_results([Vec::<expenditure::Model>::new()])
        .into_connection();
    let repo = FinanceRepository::new(db);

    let report = repo
        .financial_report(DistrictId::new(12), 2023)
        .await
        .expect("report");

    assert_eq!(report.doe_form.id.into_inner(), 5);
    assert_eq!(report.doe_form.district_id, DistrictId::new(12));
    assert_eq!(report.doe_form.year, 2023);

    assert_eq!(report.balance_sheets.len(), 2);
    assert_eq!(report.revenues.len(), 1);
    assert!(report.expenditures.is_empty());

    let first = &report.balance_sheets[0];
    assert_eq!(first.value, Some(dec!(100.25)));
    assert_eq!(first.entry_type.as_ref().map(|e| e.name.as_str()), Some("Cash"));
    assert_eq!(first.entry_type.as_ref().map(|e| e.category_id), Some(1));
    assert_eq!(first.fund_type.as_ref().map(|f| f.state_id.as_str()), Some("10"));

    let second = &report.balance_sheets[1];
    assert!(second.entry_type.is_none());
    assert_eq!(second.entry_type_id, 2);
    assert!(second.fund_type.is_some());

    let rev = &report.revenues[0];
    assert_eq!(rev.value, None);
    assert_eq!(
        rev.entry_type.as_ref().map(|e| e.account_no.as_str()),
        Some("1110")
    );
    assert!(rev.fund_type.is_none());
    assert_eq!(rev.fund_type_id, 99);
}

#[tokio::test]
async fn test_report_json_uses_external_field_names() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results([vec![form()]])
        .append_query_results([vec![balance_line(1, 1, 7)]])
        .append_query_results([vec![balance_entry(1)]])
        .append_query_results([vec![balance_fund(7)]])
        .append_query_results([Vec::<revenue::Model>::new()])
        .append_query_results([Vec::<expenditure::Model>::new()])
        .into_connection();

    let report = FinanceRepository::new(db)
        .financial_report(DistrictId::new(12), 2023)
        .await
        .expect("report");
    let json = serde_json::to_value(&report).unwrap();

    assert_eq!(json["doe_form"]["district_id"], 12);
    assert!(json["doe_form"].get("district_id_fk").is_none());
    let line = &json["balance_sheets"][0];
    assert_eq!(line["entry_type_id"], 1);
    assert_eq!(line["fund_type_id"], 7);
    assert!(line.get("balance_entry_type_id_fk").is_none());
    assert_eq!(line["value"], 100.25);
}

#[tokio::test]
async fn test_find_doe_form_none() {
    let repo = FinanceRepository::new(no_forms());
    let found = repo.find_doe_form(DistrictId::new(1), 2020).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn test_form_lookup_matches_district_and_year() {
    let db = Arc::new(no_forms());
    let repo = FinanceRepository::new(Arc::clone(&db));

    let _ = repo.financial_report(DistrictId::new(12), 2023).await;
    drop(repo);

    let statements = logged_statements(db);
    assert_eq!(statements.len(), 1);
    let lookup = &statements[0];
    assert!(lookup.sql.contains(r#"FROM "doe_form""#));
    assert!(lookup.sql.contains(r#""doe_form"."district_id_fk" = $"#));
    assert!(lookup.sql.contains(r#""doe_form"."year" = $"#));
    let values = bound_values(lookup);
    assert!(values.contains(&Value::Int(Some(12))));
    assert!(values.contains(&Value::Int(Some(2023))));
}

#[tokio::test]
async fn test_report_queries_are_scoped_to_the_form() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![form()]])
            .append_query_results([vec![balance_line(1, 1, 7), balance_line(2, 3, 7)]])
            .append_query_results([vec![balance_entry(1)]])
            .append_query_results([vec![balance_fund(7)]])
            .append_query_results([Vec::<revenue::Model>::new()])
            .append_query_results([Vec::<expenditure::Model>::new()])
            .into_connection(),
    );
    let repo = FinanceRepository::new(Arc::clone(&db));

    repo.financial_report(DistrictId::new(12), 2023)
        .await
        .expect("report");
    drop(repo);

    let statements = logged_statements(db);
    // form, balance lines + two lookups, revenue lines, expenditure lines
    assert_eq!(statements.len(), 6);

    for (statement, table) in [
        (&statements[1], "balance_sheet"),
        (&statements[4], "revenue"),
        (&statements[5], "expenditure"),
    ] {
        assert!(statement.sql.contains(&format!(r#"FROM "{table}""#)));
        assert!(
            statement
                .sql
                .contains(&format!(r#""{table}"."doe_form_id_fk" = $"#))
        );
        assert_eq!(bound_values(statement), vec![Value::Int(Some(5))]);
    }

    let entry_lookup = &statements[2];
    assert!(entry_lookup.sql.contains(r#""balance_entry_type"."id" IN ("#));
    assert_eq!(
        bound_values(entry_lookup),
        vec![Value::Int(Some(1)), Value::Int(Some(3))]
    );

    let fund_lookup = &statements[3];
    assert!(fund_lookup.sql.contains(r#""balance_fund_type"."id" IN ("#));
    assert_eq!(bound_values(fund_lookup), vec![Value::Int(Some(7))]);
}

#[tokio::test]
async fn test_domain_lines_for_one_ledger() {
    let db = Arc::new(
        MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![revenue_line(10, 4, 20), revenue_line(11, 4, 21)]])
            .append_query_results([vec![revenue_entry(4)]])
            .append_query_results([vec![revenue_fund(20)]])
            .into_connection(),
    );
    let repo = FinanceRepository::new(Arc::clone(&db));

    let lines = repo
        .domain_lines::<RevenueLedger>(DoeFormId::new(5))
        .await
        .unwrap()
        .decorate();
    drop(repo);

    assert_eq!(lines.len(), 2);
    assert!(lines[0].fund_type.is_some());
    assert!(lines[1].fund_type.is_none());

    let statements = logged_statements(db);
    // entry type 4 is looked up once
    assert_eq!(bound_values(&statements[1]), vec![Value::Int(Some(4))]);
    assert_eq!(
        bound_values(&statements[2]),
        vec![Value::Int(Some(20)), Value::Int(Some(21))]
    );
}
