//! Database Module
//!
//! Embedded SurrealDB: RocksDB-backed at runtime, in-memory for tests.

pub mod models;
pub mod repository;
pub mod schema;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "hr";
const DATABASE: &str = "admin";

/// Open the RocksDB-backed database at the given path
pub async fn connect(path: &str) -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<RocksDb>(path)
        .await
        .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
    select_namespace(&db).await?;
    tracing::info!(path, "Database connection established");
    Ok(db)
}

/// Open a fresh in-memory database (tests, ephemeral runs)
pub async fn connect_memory() -> Result<Surreal<Db>, AppError> {
    let db = Surreal::new::<Mem>(())
        .await
        .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
    select_namespace(&db).await?;
    Ok(db)
}

async fn select_namespace(db: &Surreal<Db>) -> Result<(), AppError> {
    db.use_ns(NAMESPACE)
        .use_db(DATABASE)
        .await
        .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))
}
