//! Employee Model

use super::serde_helpers;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::Patch;
use std::fmt;
use std::str::FromStr;
use surrealdb::RecordId;

/// Employee ID type
pub type EmployeeId = RecordId;

/// Employee lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    /// All accepted wire values, for error messages
    pub const VALUES: &'static str = "ACTIVE, INACTIVE";
}

impl FromStr for EmployeeStatus {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            _ => Err(()),
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Active => write!(f, "ACTIVE"),
            Self::Inactive => write!(f, "INACTIVE"),
        }
    }
}

/// Employee model
///
/// `department_id` is a weak reference: it is cleared, not cascaded, when
/// the referenced department is deleted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Employee {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub position: String,
    /// Stored and serialized as a plain number
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    #[serde(default)]
    pub status: EmployeeStatus,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub department_id: Option<RecordId>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create employee payload
///
/// `salary`, `hire_date` and `status` arrive as strings; parsing them is a
/// business-rule concern handled by the employee service.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub position: String,
    pub salary: String,
    pub hire_date: String,
    pub status: Option<String>,
    pub department_id: Option<String>,
}

/// Update employee payload
///
/// `phone` and `department_id` are clearable: an explicit null erases them,
/// a missing key leaves them untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub phone: Patch<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub salary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub department_id: Patch<String>,
}

/// Field set merged into an employee row on update
#[derive(Debug, Serialize)]
pub struct EmployeeChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub phone: Patch<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<String>,
    #[serde(
        with = "rust_decimal::serde::float_option",
        skip_serializing_if = "Option::is_none"
    )]
    pub salary: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub department_id: Patch<String>,
    pub updated_at: i64,
}

/// Employee API representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub position: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub hire_date: NaiveDate,
    pub status: EmployeeStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Employee> for EmployeeResponse {
    fn from(e: Employee) -> Self {
        Self {
            id: e.id.map(|id| id.to_string()).unwrap_or_default(),
            first_name: e.first_name,
            last_name: e.last_name,
            email: e.email,
            phone: e.phone,
            position: e.position,
            salary: e.salary,
            hire_date: e.hire_date,
            status: e.status,
            department_id: e.department_id.map(|id| id.to_string()),
            created_at: e.created_at,
            updated_at: e.updated_at,
        }
    }
}
