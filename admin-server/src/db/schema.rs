//! Table and index definitions
//!
//! Applied idempotently at startup. The unique indexes are the store-level
//! backstop for check-then-write races: the service-layer existence checks
//! are a fast path, the indexes are the guarantee. Indexes include
//! `deleted_at` so soft-deleted rows do not block reuse of their keys.

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const SCHEMA: &str = r#"
DEFINE TABLE IF NOT EXISTS department SCHEMALESS;
DEFINE INDEX IF NOT EXISTS idx_department_name ON TABLE department FIELDS name, deleted_at UNIQUE;

DEFINE TABLE IF NOT EXISTS employee SCHEMALESS;
DEFINE INDEX IF NOT EXISTS idx_employee_email ON TABLE employee FIELDS email, deleted_at UNIQUE;

DEFINE TABLE IF NOT EXISTS user SCHEMALESS;
DEFINE INDEX IF NOT EXISTS idx_user_email ON TABLE user FIELDS email UNIQUE;
"#;

/// Apply the schema definitions
pub async fn define(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(SCHEMA)
        .await
        .map_err(|e| AppError::database(format!("Failed to apply schema: {e}")))?
        .check()
        .map_err(|e| AppError::database(format!("Schema definition rejected: {e}")))?;
    tracing::debug!("Database schema applied");
    Ok(())
}
