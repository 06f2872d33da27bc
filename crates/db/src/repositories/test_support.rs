//! Helpers for reading back what a repository sent to a mock connection.

use std::sync::Arc;

use sea_orm::{DatabaseConnection, Statement, Value};

/// Drains the statements logged by a mock connection, in execution order.
///
/// Every repository sharing the connection must have been dropped.
pub(crate) fn logged_statements(db: Arc<DatabaseConnection>) -> Vec<Statement> {
    let Ok(db) = Arc::try_unwrap(db) else {
        panic!("mock connection is still shared");
    };
    db.into_transaction_log()
        .iter()
        .flat_map(|tx| tx.statements().to_vec())
        .collect()
}

/// Bound parameters of a statement.
pub(crate) fn bound_values(statement: &Statement) -> Vec<Value> {
    statement
        .values
        .as_ref()
        .map(|values| values.0.clone())
        .unwrap_or_default()
}
