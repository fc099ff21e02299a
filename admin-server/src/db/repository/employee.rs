//! Employee Repository

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{Employee, EmployeeChanges};
use crate::utils::now_millis;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "employee";

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all non-deleted employees, newest first
    pub async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE deleted_at IS NONE ORDER BY created_at DESC")
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Find employee by id; soft-deleted rows read as absent
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Employee>> {
        let employee: Option<Employee> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(employee.filter(|e| e.deleted_at.is_none()))
    }

    /// Find a non-deleted employee by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<Employee>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM employee WHERE email = $email AND deleted_at IS NONE LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let employees: Vec<Employee> = result.take(0)?;
        Ok(employees.into_iter().next())
    }

    /// Find the non-deleted employees of a department, newest first
    pub async fn find_by_department(&self, department_id: &RecordId) -> RepoResult<Vec<Employee>> {
        let employees: Vec<Employee> = self
            .base
            .db()
            .query(
                "SELECT * FROM employee \
                 WHERE department_id = $dept AND deleted_at IS NONE \
                 ORDER BY created_at DESC",
            )
            .bind(("dept", department_id.to_string()))
            .await?
            .take(0)?;
        Ok(employees)
    }

    /// Count the non-deleted employees referencing a department
    pub async fn count_by_department(&self, department_id: &RecordId) -> RepoResult<i64> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT count() FROM employee \
                 WHERE department_id = $dept AND deleted_at IS NONE GROUP ALL",
            )
            .bind(("dept", department_id.to_string()))
            .await?;
        let count: Option<i64> = result.take((0, "count"))?;
        Ok(count.unwrap_or(0))
    }

    /// Persist a new employee
    pub async fn create(&self, employee: Employee) -> RepoResult<Employee> {
        let created: Option<Employee> = self.base.db().create(TABLE).content(employee).await?;
        created.ok_or_else(|| RepoError::Database("Failed to create employee".to_string()))
    }

    /// Merge the supplied fields into an existing employee
    pub async fn update(&self, id: &RecordId, changes: EmployeeChanges) -> RepoResult<Employee> {
        self.base
            .db()
            .query("UPDATE $thing MERGE $data")
            .bind(("thing", id.clone()))
            .bind(("data", changes))
            .await?
            .check()?;

        let updated: Option<Employee> = self.base.db().select(id.clone()).await?;
        updated
            .filter(|e| e.deleted_at.is_none())
            .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))
    }

    /// Mark an employee deleted; false when it was already gone
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
        let deleted: Option<Employee> = result.take(0)?;
        Ok(deleted.is_some())
    }

    /// Drop the department reference from every active employee of a
    /// deleted department; returns how many were touched
    pub async fn clear_department(&self, department_id: &RecordId) -> RepoResult<usize> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE employee SET department_id = NONE, updated_at = $now \
                 WHERE department_id = $dept AND deleted_at IS NONE",
            )
            .bind(("dept", department_id.to_string()))
            .bind(("now", now))
            .await?;
        let cleared: Vec<Employee> = result.take(0)?;
        Ok(cleared.len())
    }
}
