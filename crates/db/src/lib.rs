//! Database layer with `SeaORM` entities and repositories.
//!
//! This crate provides:
//! - `SeaORM` entity definitions for the reporting schema
//! - Read-only repositories for reports, taxonomy and enrollment
//! - Database migrations

pub mod entities;
pub mod migration;
pub mod repositories;

pub use repositories::{EnrollmentRepository, FinanceRepository, TaxonomyRepository};

use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use schoolfin_shared::config::DatabaseConfig;
use tracing::info;

/// Establishes a pooled connection to the database.
///
/// # Errors
///
/// Returns an error if the connection cannot be established.
pub async fn connect(config: &DatabaseConfig) -> Result<DatabaseConnection, DbErr> {
    let mut options = ConnectOptions::new(config.url.clone());
    options
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .sqlx_logging(false);

    let db = Database::connect(options).await?;
    info!(
        max_connections = config.max_connections,
        "Database pool ready"
    );
    Ok(db)
}
