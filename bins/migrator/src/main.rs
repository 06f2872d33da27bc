//! Database migration runner for SchoolFin.
//!
//! Reads `DATABASE_URL` from the environment (or `.env`).
//!
//! Usage:
//!   migrator up      - Create the reporting schema
//!   migrator down    - Drop the reporting schema
//!   migrator status  - Show migration status
//!   migrator fresh   - Drop all tables and re-run migrations

use sea_orm_migration::prelude::*;
use schoolfin_db::migration::Migrator;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // The CLI sets up its own tracing
    cli::run_cli(Migrator).await;
}
