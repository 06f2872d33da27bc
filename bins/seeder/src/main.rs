//! Database seeder for SchoolFin development and testing.
//!
//! Seeds one demo district with a school, grade levels, enrollment history,
//! the entry/fund type taxonomy of every domain, and one DOE form with lines.
//! Running it twice is a no-op.
//!
//! Usage: cargo run --bin seeder

use anyhow::Context;
use chrono::{NaiveDateTime, Utc};
use rust_decimal::Decimal;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set,
};
use schoolfin_db::entities::{
    balance_entry_category_type, balance_entry_super_category_type, balance_entry_type,
    balance_fund_type, balance_sheet, district, doe_form, expenditure,
    expenditure_entry_category_type, expenditure_entry_super_category_type,
    expenditure_entry_type, expenditure_fund_type, grades, revenue, revenue_entry_category_type,
    revenue_entry_super_category_type, revenue_entry_type, revenue_fund_type, school,
    school_enrollment,
};
use schoolfin_shared::AppConfig;

const DEMO_DISTRICT: &str = "Demo Unified School District";
const DEMO_SCHOOL: &str = "Demo Elementary";
const GRADE_NAMES: [&str; 6] = ["K", "1", "2", "3", "4", "5"];
const ENROLLMENT_YEARS: [i32; 3] = [2019, 2020, 2021];
const FORM_YEAR: i32 = 2021;

/// Fund types shared by every domain as `(state_id, state_name)`.
const FUND_TYPES: [(&str, &str); 2] = [("10", "General Fund"), ("20", "Special Revenue Fund")];

/// Per-domain taxonomy: super category, category, then `(name, account_no, page, line)`.
struct DomainSeed {
    super_category: &'static str,
    category: &'static str,
    entry_types: [(&'static str, &'static str, &'static str, &'static str); 2],
}

const BALANCE: DomainSeed = DomainSeed {
    super_category: "Assets",
    category: "Current Assets",
    entry_types: [
        ("Cash and Investments", "101", "3", "1"),
        ("Taxes Receivable", "121", "3", "2"),
    ],
};

const REVENUE: DomainSeed = DomainSeed {
    super_category: "Local Sources",
    category: "Taxes",
    entry_types: [
        ("Property Taxes", "1110", "5", "1"),
        ("Sales Taxes", "1130", "5", "3"),
    ],
};

const EXPENDITURE: DomainSeed = DomainSeed {
    super_category: "Instruction",
    category: "Regular Programs",
    entry_types: [
        ("Salaries", "1000-100", "8", "1"),
        ("Supplies", "1000-600", "8", "4"),
    ],
};

/// Seeds one domain's taxonomy and the form's lines for it.
///
/// The three domains live in parallel tables, so the body is stamped out
/// once per table set.
macro_rules! seed_domain {
    (
        $db:expr, $now:expr, $form_id:expr, $seed:expr,
        $super_mod:ident, $category_mod:ident { $super_fk:ident },
        $entry_mod:ident { $category_fk:ident }, $fund_mod:ident,
        $line_mod:ident { $entry_fk:ident, $fund_fk:ident }
    ) => {{
        let db: &DatabaseConnection = $db;
        let now: NaiveDateTime = $now;
        let seed: &DomainSeed = &$seed;

        let super_category = $super_mod::ActiveModel {
            name: Set(seed.super_category.to_string()),
            date_created: Set(now),
            date_updated: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let category = $category_mod::ActiveModel {
            name: Set(seed.category.to_string()),
            $super_fk: Set(super_category.id),
            date_created: Set(now),
            date_updated: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;

        let mut fund_ids = Vec::with_capacity(FUND_TYPES.len());
        for (state_id, state_name) in FUND_TYPES {
            let fund = $fund_mod::ActiveModel {
                state_id: Set(state_id.to_string()),
                state_name: Set(state_name.to_string()),
                date_created: Set(now),
                date_updated: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
            fund_ids.push(fund.id);
        }

        for (n, (name, account_no, page, line)) in seed.entry_types.into_iter().enumerate() {
            let entry = $entry_mod::ActiveModel {
                name: Set(name.to_string()),
                account_no: Set(account_no.to_string()),
                page: Set(Some(page.to_string())),
                line: Set(Some(line.to_string())),
                $category_fk: Set(category.id),
                date_created: Set(now),
                date_updated: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;

            for (m, fund_id) in fund_ids.iter().enumerate() {
                let cents = 1_000_000 * i64::try_from(n + 1)? + 25_050 * i64::try_from(m)?;
                $line_mod::ActiveModel {
                    doe_form_id_fk: Set($form_id),
                    $entry_fk: Set(entry.id),
                    $fund_fk: Set(*fund_id),
                    value: Set(Some(Decimal::new(cents, 2))),
                    date_created: Set(now),
                    date_updated: Set(now),
                    ..Default::default()
                }
                .insert(db)
                .await?;
            }
        }

        println!(
            "  {} entry types, {} fund types",
            seed.entry_types.len(),
            fund_ids.len()
        );
    }};
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    println!("Connecting to database...");
    let db = schoolfin_db::connect(&config.database)
        .await
        .context("Failed to connect to database")?;

    if district::Entity::find()
        .filter(district::Column::Name.eq(DEMO_DISTRICT))
        .one(&db)
        .await?
        .is_some()
    {
        println!("Demo district already exists, skipping...");
        return Ok(());
    }

    let now = Utc::now().naive_utc();

    println!("Seeding district and school...");
    let district = district::ActiveModel {
        name: Set(DEMO_DISTRICT.to_string()),
        date_created: Set(now),
        date_updated: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    let school = school::ActiveModel {
        name: Set(DEMO_SCHOOL.to_string()),
        district_id_fk: Set(district.id),
        date_created: Set(now),
        date_updated: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    println!("Seeding grades and enrollment...");
    seed_enrollment(&db, now, school.id).await?;

    println!("Seeding DOE form for {FORM_YEAR}...");
    let form = doe_form::ActiveModel {
        district_id_fk: Set(district.id),
        year: Set(FORM_YEAR),
        date_created: Set(now),
        date_updated: Set(now),
        ..Default::default()
    }
    .insert(&db)
    .await?;

    println!("Seeding balance sheet...");
    seed_domain!(
        &db, now, form.id, BALANCE,
        balance_entry_super_category_type,
        balance_entry_category_type { balance_entry_super_category_id_fk },
        balance_entry_type { balance_entry_category_type_id_fk },
        balance_fund_type,
        balance_sheet { balance_entry_type_id_fk, balance_fund_type_id_fk }
    );

    println!("Seeding revenues...");
    seed_domain!(
        &db, now, form.id, REVENUE,
        revenue_entry_super_category_type,
        revenue_entry_category_type { revenue_entry_super_category_id_fk },
        revenue_entry_type { revenue_entry_category_type_id_fk },
        revenue_fund_type,
        revenue { revenue_entry_type_id_fk, revenue_fund_type_id_fk }
    );

    println!("Seeding expenditures...");
    seed_domain!(
        &db, now, form.id, EXPENDITURE,
        expenditure_entry_super_category_type,
        expenditure_entry_category_type { expenditure_entry_super_category_id_fk },
        expenditure_entry_type { expenditure_entry_category_type_id_fk },
        expenditure_fund_type,
        expenditure { expenditure_entry_type_id_fk, expenditure_fund_type_id_fk }
    );

    println!(
        "Seeding complete! Try /api/v1/finance/report?district_id={}&year={FORM_YEAR}",
        district.id
    );
    Ok(())
}

/// Seeds grade levels and a few years of enrollment for one school.
async fn seed_enrollment(
    db: &DatabaseConnection,
    now: NaiveDateTime,
    school_id: i32,
) -> anyhow::Result<()> {
    let mut grade_ids = Vec::with_capacity(GRADE_NAMES.len());
    for name in GRADE_NAMES {
        let grade = grades::ActiveModel {
            name: Set(name.to_string()),
            date_created: Set(now),
            date_updated: Set(now),
            ..Default::default()
        }
        .insert(db)
        .await?;
        grade_ids.push(grade.id);
    }

    for (offset, year) in (0_i32..).zip(ENROLLMENT_YEARS) {
        for (level, grade_id) in (0_i32..).zip(&grade_ids) {
            school_enrollment::ActiveModel {
                school_id_fk: Set(school_id),
                grade_id_fk: Set(*grade_id),
                year: Set(year),
                enrollment: Set(60 + 3 * offset - 2 * level),
                date_created: Set(now),
                date_updated: Set(now),
                ..Default::default()
            }
            .insert(db)
            .await?;
        }
    }

    println!(
        "  {} grades, {} years",
        grade_ids.len(),
        ENROLLMENT_YEARS.len()
    );
    Ok(())
}
