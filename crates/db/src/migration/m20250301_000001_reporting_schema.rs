//! Reporting schema migration.
//!
//! Creates the location, enrollment and DOE finance tables read by the API.
//! Rows are loaded by the external ingestion process.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();

        // ============================================================
        // PART 1: LOCATIONS & ENROLLMENT
        // ============================================================
        db.execute_unprepared(LOCATION_SQL).await?;
        db.execute_unprepared(ENROLLMENT_SQL).await?;

        // ============================================================
        // PART 2: FINANCE TAXONOMY (per domain)
        // ============================================================
        db.execute_unprepared(TAXONOMY_SQL).await?;

        // ============================================================
        // PART 3: DOE FORMS & LINES
        // ============================================================
        db.execute_unprepared(DOE_FORM_SQL).await?;
        db.execute_unprepared(LINES_SQL).await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(DROP_ALL_SQL).await?;
        Ok(())
    }
}

// ============================================================
// SQL CONSTANTS
// ============================================================

const LOCATION_SQL: &str = r"
CREATE TABLE district (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE school (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    district_id_fk INTEGER NOT NULL REFERENCES district(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE grades (
    id SERIAL PRIMARY KEY,
    name VARCHAR(50) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);
";

const ENROLLMENT_SQL: &str = r"
CREATE TABLE school_enrollment (
    id SERIAL PRIMARY KEY,
    school_id_fk INTEGER NOT NULL REFERENCES school(id),
    grade_id_fk INTEGER NOT NULL REFERENCES grades(id),
    year INTEGER NOT NULL,
    enrollment INTEGER NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW(),
    UNIQUE (school_id_fk, grade_id_fk, year)
);

CREATE INDEX idx_school_enrollment_school_year ON school_enrollment(school_id_fk, year);
";

const TAXONOMY_SQL: &str = r"
CREATE TABLE balance_entry_super_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE balance_entry_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    balance_entry_super_category_id_fk INTEGER NOT NULL REFERENCES balance_entry_super_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE balance_entry_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    account_no VARCHAR(50) NOT NULL,
    page VARCHAR(50),
    line VARCHAR(50),
    balance_entry_category_type_id_fk INTEGER NOT NULL REFERENCES balance_entry_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE balance_fund_type (
    id SERIAL PRIMARY KEY,
    state_id VARCHAR(50) NOT NULL,
    state_name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE revenue_entry_super_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE revenue_entry_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    revenue_entry_super_category_id_fk INTEGER NOT NULL REFERENCES revenue_entry_super_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE revenue_entry_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    account_no VARCHAR(50) NOT NULL,
    page VARCHAR(50),
    line VARCHAR(50),
    revenue_entry_category_type_id_fk INTEGER NOT NULL REFERENCES revenue_entry_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE revenue_fund_type (
    id SERIAL PRIMARY KEY,
    state_id VARCHAR(50) NOT NULL,
    state_name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE expenditure_entry_super_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE expenditure_entry_category_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    expenditure_entry_super_category_id_fk INTEGER NOT NULL REFERENCES expenditure_entry_super_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE expenditure_entry_type (
    id SERIAL PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    account_no VARCHAR(50) NOT NULL,
    page VARCHAR(50),
    line VARCHAR(50),
    expenditure_entry_category_type_id_fk INTEGER NOT NULL REFERENCES expenditure_entry_category_type(id),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE TABLE expenditure_fund_type (
    id SERIAL PRIMARY KEY,
    state_id VARCHAR(50) NOT NULL,
    state_name VARCHAR(255) NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);
";

const DOE_FORM_SQL: &str = r"
CREATE TABLE doe_form (
    id SERIAL PRIMARY KEY,
    district_id_fk INTEGER NOT NULL REFERENCES district(id),
    year INTEGER NOT NULL,
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

-- At most one form per district and year
CREATE UNIQUE INDEX uq_doe_form_district_year ON doe_form(district_id_fk, year);
";

const LINES_SQL: &str = r"
CREATE TABLE balance_sheet (
    id SERIAL PRIMARY KEY,
    doe_form_id_fk INTEGER NOT NULL REFERENCES doe_form(id),
    balance_entry_type_id_fk INTEGER NOT NULL REFERENCES balance_entry_type(id),
    balance_fund_type_id_fk INTEGER NOT NULL REFERENCES balance_fund_type(id),
    value NUMERIC(20, 2),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_balance_sheet_doe_form ON balance_sheet(doe_form_id_fk);

CREATE TABLE revenue (
    id SERIAL PRIMARY KEY,
    doe_form_id_fk INTEGER NOT NULL REFERENCES doe_form(id),
    revenue_entry_type_id_fk INTEGER NOT NULL REFERENCES revenue_entry_type(id),
    revenue_fund_type_id_fk INTEGER NOT NULL REFERENCES revenue_fund_type(id),
    value NUMERIC(20, 2),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_revenue_doe_form ON revenue(doe_form_id_fk);

CREATE TABLE expenditure (
    id SERIAL PRIMARY KEY,
    doe_form_id_fk INTEGER NOT NULL REFERENCES doe_form(id),
    expenditure_entry_type_id_fk INTEGER NOT NULL REFERENCES expenditure_entry_type(id),
    expenditure_fund_type_id_fk INTEGER NOT NULL REFERENCES expenditure_fund_type(id),
    value NUMERIC(20, 2),
    date_created TIMESTAMP NOT NULL DEFAULT NOW(),
    date_updated TIMESTAMP NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_expenditure_doe_form ON expenditure(doe_form_id_fk);
";

const DROP_ALL_SQL: &str = r"
DROP TABLE IF EXISTS school_enrollment CASCADE;
DROP TABLE IF EXISTS balance_sheet CASCADE;
DROP TABLE IF EXISTS revenue CASCADE;
DROP TABLE IF EXISTS expenditure CASCADE;
DROP TABLE IF EXISTS doe_form CASCADE;
DROP TABLE IF EXISTS balance_fund_type CASCADE;
DROP TABLE IF EXISTS balance_entry_type CASCADE;
DROP TABLE IF EXISTS balance_entry_category_type CASCADE;
DROP TABLE IF EXISTS balance_entry_super_category_type CASCADE;
DROP TABLE IF EXISTS revenue_fund_type CASCADE;
DROP TABLE IF EXISTS revenue_entry_type CASCADE;
DROP TABLE IF EXISTS revenue_entry_category_type CASCADE;
DROP TABLE IF EXISTS revenue_entry_super_category_type CASCADE;
DROP TABLE IF EXISTS expenditure_fund_type CASCADE;
DROP TABLE IF EXISTS expenditure_entry_type CASCADE;
DROP TABLE IF EXISTS expenditure_entry_category_type CASCADE;
DROP TABLE IF EXISTS expenditure_entry_super_category_type CASCADE;
DROP TABLE IF EXISTS grades CASCADE;
DROP TABLE IF EXISTS school CASCADE;
DROP TABLE IF EXISTS district CASCADE;
";
