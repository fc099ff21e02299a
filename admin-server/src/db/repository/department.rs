//! Department Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Department, DepartmentChanges};
use crate::utils::now_millis;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "department";

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all non-deleted departments, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Department>> {
        let departments: Vec<Department> = self
            .base
            .db()
            .query("SELECT * FROM department WHERE deleted_at IS NONE ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(departments)
    }

    /// Find department by id; soft-deleted rows read as absent
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Department>> {
        let department: Option<Department> =
            self.base.db().select(record_id(TABLE, id)).await?;
        Ok(department.filter(|d| d.deleted_at.is_none()))
    }

    /// Find a non-deleted department by exact name
    pub async fn find_by_name(&self, name: &str) -> RepoResult<Option<Department>> {
        let name_owned = name.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM department WHERE name = $name AND deleted_at IS NONE LIMIT 1")
            .bind(("name", name_owned))
            .await?;
        let departments: Vec<Department> = result.take(0)?;
        Ok(departments.into_iter().next())
    }

    /// Persist a new department
    pub async fn create(&self, department: Department) -> RepoResult<Department> {
        let created: Option<Department> =
            self.base.db().create(TABLE).content(department).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create department".to_string()))
    }

    /// Merge the supplied fields into an existing department
    pub async fn update(&self, id: &RecordId, changes: DepartmentChanges) -> RepoResult<Department> {
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", id.clone()))
            .bind(("data", changes))
            .await?
            .check()?;

        let updated: Option<Department> = self.base.db().select(id.clone()).await?;
        updated
            .filter(|d| d.deleted_at.is_none())
            .ok_or_else(|| RepoError::NotFound(format!("Department {} not found", id)))
    }

    /// Mark a department deleted; false when it was already gone
    pub async fn soft_delete(&self, id: &RecordId) -> RepoResult<bool> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $thing SET deleted_at = $now, updated_at = $now \
                 WHERE deleted_at IS NONE RETURN AFTER",
            )
            .bind(("thing", id.clone()))
            .bind(("now", now))
            .await?;
        let deleted: Option<Department> = result.take(0)?;
        Ok(deleted.is_some())
    }
}
