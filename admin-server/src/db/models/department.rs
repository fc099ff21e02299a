//! Department Model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::Patch;
use surrealdb::RecordId;

/// Department ID type
pub type DepartmentId = RecordId;

/// Department model
///
/// `deleted_at` is the soft-deletion marker: deleted rows stay in the table
/// but are invisible to every default read path.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<DepartmentId>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<i64>,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentCreate {
    pub name: String,
    pub description: Option<String>,
}

/// Update department payload
///
/// `description` is clearable: an explicit null erases it, a missing key
/// leaves it untouched.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
}

/// Field set merged into a department row on update
#[derive(Debug, Serialize)]
pub struct DepartmentChanges {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Patch::is_absent")]
    pub description: Patch<String>,
    pub updated_at: i64,
}

/// Department API representation
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepartmentResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Department> for DepartmentResponse {
    fn from(d: Department) -> Self {
        Self {
            id: d.id.map(|id| id.to_string()).unwrap_or_default(),
            name: d.name,
            description: d.description,
            created_at: d.created_at,
            updated_at: d.updated_at,
        }
    }
}
