//! Employee rules
//!
//! Validation order on create is fixed for deterministic error reporting:
//! email uniqueness, department existence, salary, hire date, status. On
//! update, each rule reruns only when its field is supplied.

use rust_decimal::Decimal;
use surrealdb::RecordId;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::db::models::{
    Employee, EmployeeChanges, EmployeeCreate, EmployeeStatus, EmployeeUpdate,
};
use crate::db::repository::{DepartmentRepository, EmployeeRepository, RepoError};
use crate::utils::validation::{
    FieldErrors, MAX_EMAIL_LEN, MAX_NAME_LEN, MAX_PHONE_LEN, MAX_TITLE_LEN, check_optional_text,
    check_required_text,
};
use crate::utils::now_millis;
use chrono::NaiveDate;
use shared::{AppError, AppResult, ErrorCode, Patch};

fn employee_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeNotFound,
        format!("Employee with id {id} not found"),
    )
    .with_detail("id", id)
}

fn department_not_found(id: &str) -> AppError {
    AppError::with_message(
        ErrorCode::DepartmentNotFound,
        format!("Department with id {id} not found"),
    )
    .with_detail("id", id)
}

fn email_exists(email: &str) -> AppError {
    AppError::with_message(
        ErrorCode::EmployeeEmailExists,
        format!("Employee with email \"{email}\" already exists"),
    )
    .with_detail("email", email)
}

fn parse_salary(raw: &str) -> AppResult<Decimal> {
    let invalid = || {
        AppError::with_message(
            ErrorCode::InvalidSalary,
            "Salary must be a valid non-negative number",
        )
        .with_detail("salary", raw)
    };
    let salary: Decimal = raw.trim().parse().map_err(|_| invalid())?;
    if salary.is_sign_negative() {
        return Err(invalid());
    }
    Ok(salary)
}

fn parse_hire_date(raw: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidHireDate,
            "Hire date must be a valid date (YYYY-MM-DD)",
        )
        .with_detail("hireDate", raw)
    })
}

fn parse_status(raw: &str) -> AppResult<EmployeeStatus> {
    raw.parse().map_err(|_| {
        AppError::with_message(
            ErrorCode::InvalidStatus,
            format!("Status must be one of: {}", EmployeeStatus::VALUES),
        )
        .with_detail("status", raw)
    })
}

#[derive(Clone)]
pub struct EmployeeService {
    employees: EmployeeRepository,
    departments: DepartmentRepository,
}

impl EmployeeService {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            employees: EmployeeRepository::new(db.clone()),
            departments: DepartmentRepository::new(db),
        }
    }

    /// All non-deleted employees, newest first
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.employees.find_all().await?)
    }

    /// Single employee; soft-deleted rows are not found
    pub async fn get_by_id(&self, id: &str) -> AppResult<Employee> {
        self.employees
            .find_by_id(id)
            .await?
            .ok_or_else(|| employee_not_found(id))
    }

    /// Employees of a department
    ///
    /// The department itself must exist and be active; an empty roster is a
    /// valid result, a deleted department is not.
    pub async fn list_by_department(&self, department_id: &str) -> AppResult<Vec<Employee>> {
        let department = self
            .departments
            .find_by_id(department_id)
            .await?
            .ok_or_else(|| department_not_found(department_id))?;
        let record_id = department
            .id
            .ok_or_else(|| AppError::internal("Department record missing id"))?;

        Ok(self.employees.find_by_department(&record_id).await?)
    }

    /// Create an employee
    ///
    /// Nothing is persisted until every check has passed.
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<Employee> {
        let mut errors = FieldErrors::new();
        check_required_text(&data.first_name, "firstName", MAX_NAME_LEN, &mut errors);
        check_required_text(&data.last_name, "lastName", MAX_NAME_LEN, &mut errors);
        check_required_text(&data.email, "email", MAX_EMAIL_LEN, &mut errors);
        check_optional_text(data.phone.as_deref(), "phone", MAX_PHONE_LEN, &mut errors);
        check_required_text(&data.position, "position", MAX_TITLE_LEN, &mut errors);
        errors.into_result()?;

        if self.employees.find_by_email(&data.email).await?.is_some() {
            return Err(email_exists(&data.email));
        }

        let department_id = match data.department_id.as_deref() {
            Some(raw) => Some(self.resolve_department(raw).await?),
            None => None,
        };

        let salary = parse_salary(&data.salary)?;
        let hire_date = parse_hire_date(&data.hire_date)?;
        let status = match data.status.as_deref() {
            Some(raw) => parse_status(raw)?,
            None => EmployeeStatus::default(),
        };

        let email = data.email.clone();
        let now = now_millis();
        let employee = Employee {
            id: None,
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            position: data.position,
            salary,
            hire_date,
            status,
            department_id,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        };

        let created = self.employees.create(employee).await.map_err(|e| match e {
            RepoError::Duplicate(_) => email_exists(&email),
            other => other.into(),
        })?;

        tracing::info!(id = %created.id.as_ref().map(ToString::to_string).unwrap_or_default(),
            email = %created.email, "Employee created");
        Ok(created)
    }

    /// Merge the supplied fields into an existing employee
    ///
    /// Email uniqueness reruns only when the email changes, department
    /// existence only when a new department is referenced; salary, hire date
    /// and status are re-parsed only when present. `phone` and
    /// `department_id` honor an explicit null as "clear".
    pub async fn update(&self, id: &str, data: EmployeeUpdate) -> AppResult<Employee> {
        let existing = self.get_by_id(id).await?;
        let record_id = existing
            .id
            .clone()
            .ok_or_else(|| AppError::internal("Employee record missing id"))?;

        let mut errors = FieldErrors::new();
        if let Some(first_name) = &data.first_name {
            check_required_text(first_name, "firstName", MAX_NAME_LEN, &mut errors);
        }
        if let Some(last_name) = &data.last_name {
            check_required_text(last_name, "lastName", MAX_NAME_LEN, &mut errors);
        }
        if let Some(email) = &data.email {
            check_required_text(email, "email", MAX_EMAIL_LEN, &mut errors);
        }
        check_optional_text(
            data.phone.as_value().map(String::as_str),
            "phone",
            MAX_PHONE_LEN,
            &mut errors,
        );
        if let Some(position) = &data.position {
            check_required_text(position, "position", MAX_TITLE_LEN, &mut errors);
        }
        errors.into_result()?;

        if let Some(email) = &data.email
            && email != &existing.email
            && self.employees.find_by_email(email).await?.is_some()
        {
            return Err(email_exists(email));
        }

        let department_id = match &data.department_id {
            Patch::Absent => Patch::Absent,
            Patch::Null => Patch::Null,
            Patch::Value(raw) => {
                let current = existing.department_id.as_ref().map(ToString::to_string);
                if current.as_deref() == Some(raw.as_str()) {
                    Patch::Value(raw.clone())
                } else {
                    let resolved = self.resolve_department(raw).await?;
                    Patch::Value(resolved.to_string())
                }
            }
        };

        let salary = data.salary.as_deref().map(parse_salary).transpose()?;
        let hire_date = data.hire_date.as_deref().map(parse_hire_date).transpose()?;
        let status = data.status.as_deref().map(parse_status).transpose()?;

        let new_email = data.email.clone();
        let changes = EmployeeChanges {
            first_name: data.first_name,
            last_name: data.last_name,
            email: data.email,
            phone: data.phone,
            position: data.position,
            salary,
            hire_date,
            status,
            department_id,
            updated_at: now_millis(),
        };

        let updated = self
            .employees
            .update(&record_id, changes)
            .await
            .map_err(|e| match e {
                RepoError::NotFound(_) => employee_not_found(id),
                RepoError::Duplicate(_) => {
                    email_exists(new_email.as_deref().unwrap_or(&existing.email))
                }
                other => other.into(),
            })?;

        tracing::info!(id = %record_id, "Employee updated");
        Ok(updated)
    }

    /// Soft-delete an employee
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let existing = self.get_by_id(id).await?;
        let record_id = existing
            .id
            .ok_or_else(|| AppError::internal("Employee record missing id"))?;

        let deleted = self.employees.soft_delete(&record_id).await?;
        if !deleted {
            return Err(employee_not_found(id));
        }

        tracing::info!(id = %record_id, "Employee deleted");
        Ok(())
    }

    async fn resolve_department(&self, raw: &str) -> AppResult<RecordId> {
        let department = self
            .departments
            .find_by_id(raw)
            .await?
            .ok_or_else(|| department_not_found(raw))?;
        department
            .id
            .ok_or_else(|| AppError::internal("Department record missing id"))
    }
}
