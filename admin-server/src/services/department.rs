//! Department rules
//!
//! Name uniqueness is checked here as a fast path; the unique index defined
//! in `db::schema` is the backstop for concurrent creates racing past the
//! check.

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{Department, DepartmentChanges, DepartmentCreate, DepartmentUpdate};
use crate::db::repository::{DepartmentRepository, EmployeeRepository, RepoError};
use crate::utils::validation::{
    FieldErrors, MAX_DESCRIPTION_LEN, MAX_TITLE_LEN, check_optional_text, check_required_text,
};
use crate::utils::now_millis;
use shared::{AppError, AppResult, ErrorCode};

fn department_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DepartmentNotFound,
        format!("Department with id {id} not found"),
    )
    .with_detail("id", id)
}

fn name_exists(name: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DepartmentNameExists,
        format!("Department with name \"{name}\" already exists"),
    )
    .with_detail("name", name)
}

#[derive(Clone)]
pub struct DepartmentService {
    departments: DepartmentRepository,
    employees: EmployeeRepository,
}

impl DepartmentService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            departments: DepartmentRepository::new(db.clone()),
            employees: EmployeeRepository::new(db),
        }
    }

    /// All non-deleted departments, newest first
    pub async fn list(&self) -> AppResult<Vec<Department>> {
        Ok(self.departments.find_all().await?)
    }

    /// Single department; soft-deleted rows are not found
    pub async fn get_by_id(&self, id: &str) -> AppResult<Department> {
        self.departments
            .find_by_id(id)
            .await?
            .ok_or_else(|| department_not_found(id))
    }

    /// Create a department after validating the name and its uniqueness
    pub async fn create(&self, data: DepartmentCreate) -> AppResult<Department> {
        let mut errors = FieldErrors::new();
        check_required_text(&data.name, "name", MAX_TITLE_LEN, &mut errors);
        check_optional_text(
            data.description.as_deref(),
            "description",
            MAX_DESCRIPTION_LEN,
            &mut errors,
        );
        errors.into_result()?;

        if self.departments.find_by_name(&data.name).await?.is_some() {
            return Err(name_exists(&data.name));
        }

        let name = data.name.clone();
        let now = now_millis();
        let department = Department {
            id: None,
            name: data.name,
            description: data.description,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self
            .departments
            .create(department)
            .await
            .map_err(|e| match e {
                RepoError::Duplicate(_) => name_exists(&name),
                other => other.into(),
            })?;

        tracing::info!(id = %created.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            name = %created.name, "Department created");
        Ok(created)
    }

    /// Merge the supplied fields into an existing department
    ///
    /// The uniqueness check reruns only when a new, different name is
    /// supplied; the record's own row never collides with itself. An empty
    /// partial is a no-op that still returns the current record.
    pub async fn update(&self, id: &str, data: DepartmentUpdate) -> AppResult<Department> {
        let existing = self.get_by_id(id).await?;
        let record_id = existing
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Department record missing id"))?;

        let mut errors = FieldErrors::new();
        if let Some(name) = &data.name {
            check_required_text(name, "name", MAX_TITLE_LEN, &mut errors);
        }
        check_optional_text(
            data.description.as_value().map(String::as_str),
            "description",
            MAX_DESCRIPTION_LEN,
            &mut errors,
        );
        errors.into_result()?;

        if let Some(name) = &data.name
            && name != &existing.name
            && self.departments.find_by_name(name).await?.is_some()
        {
            return Err(name_exists(name));
        }

        let new_name = data.name.clone();
        let changes = DepartmentChanges {
            name: data.name,
            description: data.description,
            updated_at: now_millis(),
        };

        let updated = self
            .departments
            .update(&record_id, changes)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => department_not_found(id),
                RepoError::Duplicate(_) => {
                    name_exists(new_name.as_deref().unwrap_or(&existing.name))
                }
                other => other.into(),
            })?;

        tracing::info!(id = %record_id, "Department updated");
        Ok(updated)
    }

    /// Soft-delete a department and clear the reference on its employees
    ///
    /// Employees are kept; only their weak reference to the department is
    /// dropped.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;
        let record_id = existing
            .id
            .ok_or_else(|| AppError::internal("Department record missing id"))?;

        let deleted = self.departments.soft_delete(&record_id).await?;
        if !deleted {
            return Err(department_not_found(id));
        }

        let cleared = self.employees.clear_department(&record_id).await?;
        tracing::info!(id = %record_id, cleared_employees = cleared, "Department deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::models::EmployeeCreate;
    use crate::db::{connect_memory, schema};
    use crate::services::EmployeeService;
    use shared::Patch;

    async fn test_db() -> Surreal<Db> {
        let db = connect_memory().await.unwrap();
        schema::define(&db).await.unwrap();
        db
    }

    fn create_payload(name: &str) -> DepartmentCreate {
        DepartmentCreate {
            name: name.to_string(),
            description: None,
        }
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let service = DepartmentService::new(test_db().await);

        let created = service
            .create(DepartmentCreate {
                name: "Engineering".to_string(),
                description: Some("Builds things".to_string()),
            })
            .await
            .unwrap();

        let id = created.id.as_ref().unwrap().to_string();
        let fetched = service.get_by_id(&id).await.unwrap();
        assert_eq!(fetched.name, "Engineering");
        assert_eq!(fetched.description.as_deref(), Some("Builds things"));
        assert!(fetched.deleted_at.is_none());
    }

    #[tokio::test]
    async fn test_create_twice_conflicts() {
        let service = DepartmentService::new(test_db().await);

        service.create(create_payload("Engineering")).await.unwrap();
        let err = service
            .create(create_payload("Engineering"))
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNameExists);
    }

    #[tokio::test]
    async fn test_create_collects_all_field_errors() {
        let service = DepartmentService::new(test_db().await);

        let err = service
            .create(DepartmentCreate {
                name: "".to_string(),
                description: Some("d".repeat(MAX_DESCRIPTION_LEN + 1)),
            })
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        let fields = details.get("fields").unwrap();
        assert!(fields.get("name").is_some());
        assert!(fields.get("description").is_some());
    }

    #[tokio::test]
    async fn test_get_unknown_not_found() {
        let service = DepartmentService::new(test_db().await);
        let err = service.get_by_id("department:missing").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }

    #[tokio::test]
    async fn test_update_merges_only_supplied_fields() {
        let service = DepartmentService::new(test_db().await);
        let created = service
            .create(DepartmentCreate {
                name: "Engineering".to_string(),
                description: Some("Builds things".to_string()),
            })
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = service
            .update(
                &id,
                DepartmentUpdate {
                    name: Some("Platform Engineering".to_string()),
                    description: Patch::Absent,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Platform Engineering");
        assert_eq!(updated.description.as_deref(), Some("Builds things"));
    }

    #[tokio::test]
    async fn test_update_clears_description_on_explicit_null() {
        let service = DepartmentService::new(test_db().await);
        let created = service
            .create(DepartmentCreate {
                name: "Engineering".to_string(),
                description: Some("Builds things".to_string()),
            })
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = service
            .update(
                &id,
                DepartmentUpdate {
                    name: None,
                    description: Patch::Null,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "Engineering");
        assert!(updated.description.is_none());
    }

    #[tokio::test]
    async fn test_empty_partial_update_is_noop() {
        let service = DepartmentService::new(test_db().await);
        let created = service
            .create(DepartmentCreate {
                name: "Engineering".to_string(),
                description: Some("Builds things".to_string()),
            })
            .await
            .unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = service
            .update(
                &id,
                DepartmentUpdate {
                    name: None,
                    description: Patch::Absent,
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, created.name);
        assert_eq!(updated.description, created.description);
        assert_eq!(updated.created_at, created.created_at);
        assert!(updated.updated_at >= created.updated_at);
    }

    #[tokio::test]
    async fn test_update_name_collision_conflicts() {
        let service = DepartmentService::new(test_db().await);
        service.create(create_payload("Engineering")).await.unwrap();
        let sales = service.create(create_payload("Sales")).await.unwrap();
        let id = sales.id.as_ref().unwrap().to_string();

        let err = service
            .update(
                &id,
                DepartmentUpdate {
                    name: Some("Engineering".to_string()),
                    description: Patch::Absent,
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNameExists);
    }

    #[tokio::test]
    async fn test_update_keeping_own_name_is_allowed() {
        let service = DepartmentService::new(test_db().await);
        let created = service.create(create_payload("Engineering")).await.unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        let updated = service
            .update(
                &id,
                DepartmentUpdate {
                    name: Some("Engineering".to_string()),
                    description: Patch::Value("Still building".to_string()),
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.description.as_deref(), Some("Still building"));
    }

    #[tokio::test]
    async fn test_delete_then_get_not_found() {
        let service = DepartmentService::new(test_db().await);
        let created = service.create(create_payload("Engineering")).await.unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        service.delete(&id).await.unwrap();

        let err = service.get_by_id(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }

    #[tokio::test]
    async fn test_delete_twice_not_found() {
        let service = DepartmentService::new(test_db().await);
        let created = service.create(create_payload("Engineering")).await.unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        service.delete(&id).await.unwrap();
        let err = service.delete(&id).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::DepartmentNotFound);
    }

    #[tokio::test]
    async fn test_deleted_name_can_be_reused() {
        let service = DepartmentService::new(test_db().await);
        let created = service.create(create_payload("Engineering")).await.unwrap();
        let id = created.id.as_ref().unwrap().to_string();

        service.delete(&id).await.unwrap();
        service.create(create_payload("Engineering")).await.unwrap();
    }

    #[tokio::test]
    async fn test_delete_clears_employee_references() {
        let db = test_db().await;
        let departments = DepartmentService::new(db.clone());
        let employees = EmployeeService::new(db.clone());

        let dept = departments
            .create(create_payload("Engineering"))
            .await
            .unwrap();
        let dept_id = dept.id.as_ref().unwrap().to_string();

        let employee = employees
            .create(EmployeeCreate {
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                email: "john@x.com".to_string(),
                phone: None,
                position: "Engineer".to_string(),
                salary: "100000".to_string(),
                hire_date: "2023-01-15".to_string(),
                status: None,
                department_id: Some(dept_id.clone()),
            })
            .await
            .unwrap();
        assert!(employee.department_id.is_some());

        departments.delete(&dept_id).await.unwrap();

        let employee_id = employee.id.as_ref().unwrap().to_string();
        let reloaded = employees.get_by_id(&employee_id).await.unwrap();
        assert!(reloaded.deleted_at.is_none());
        assert!(reloaded.department_id.is_none());
    }

    #[tokio::test]
    async fn test_list_excludes_deleted_and_orders_newest_first() {
        let service = DepartmentService::new(test_db().await);
        let first = service.create(create_payload("Engineering")).await.unwrap();
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
        let second = service.create(create_payload("Sales")).await.unwrap();

        let all = service.list().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, second.id);
        assert_eq!(all[1].id, first.id);

        service
            .delete(&second.id.as_ref().unwrap().to_string())
            .await
            .unwrap();
        let remaining = service.list().await.unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, first.id);
    }
}
