//! User (credential holder) Model
//!
//! Users are provisioned at startup (seed) and read-only afterwards.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::UserInfo;
use std::fmt;
use surrealdb::RecordId;

/// User ID type
pub type UserId = RecordId;

/// User role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum UserRole {
    #[default]
    Admin,
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "ADMIN"),
        }
    }
}

/// User model
///
/// The password hash is never serialized outward; it is written through a
/// dedicated create query and only read back for verification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "serde_helpers::option_record_id"
    )]
    pub id: Option<UserId>,
    pub email: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default)]
    pub role: UserRole,
    pub created_at: i64,
    pub updated_at: i64,
}

impl User {
    /// Record id as "user:key" string
    pub fn id_string(&self) -> String {
        self.id.as_ref().map(|id| id.to_string()).unwrap_or_default()
    }

    /// Client-safe representation
    pub fn to_info(&self) -> UserInfo {
        UserInfo {
            id: self.id_string(),
            email: self.email.clone(),
            role: self.role.to_string(),
            created_at: self.created_at,
        }
    }
}
