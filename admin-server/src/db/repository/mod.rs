//! Repository Module
//!
//! CRUD operations over the embedded SurrealDB tables. Repositories are the
//! only layer issuing queries; business rules live in `services`.

pub mod department;
pub mod employee;
pub mod user;

pub use department::DepartmentRepository;
pub use employee::EmployeeRepository;
pub use user::UserRepository;

use shared::{AppError, ErrorCode};
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        let msg = err.to_string();
        // Unique-index rejections are the store-level backstop for
        // check-then-write races; surface them as duplicates, not failures.
        if msg.contains("already contains") {
            RepoError::Duplicate(msg)
        } else {
            RepoError::Database(msg)
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(m) => AppError::with_message(ErrorCode::NotFound, m),
            RepoError::Duplicate(m) => AppError::conflict(m),
            RepoError::Validation(m) => AppError::invalid(m),
            RepoError::Database(m) => AppError::database(m),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:key" strings on the wire, RecordId everywhere else
// =============================================================================

/// Resolve an incoming id string to a RecordId for the given table
///
/// Accepts both the full "table:key" form and a bare key.
pub fn record_id(table: &str, id: &str) -> RecordId {
    id.parse::<RecordId>()
        .unwrap_or_else(|_| RecordId::from_table_key(table, id))
}

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
