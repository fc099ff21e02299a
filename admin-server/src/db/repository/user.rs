//! User Repository
//!
//! Users are written once at seed time and read for authentication.

use super::{BaseRepository, RepoError, RepoResult, record_id};
use crate::db::models::{User, UserRole};
use crate::utils::now_millis;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const TABLE: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
}

impl UserRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find user by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<User>> {
        let user: Option<User> = self.base.db().select(record_id(TABLE, id)).await?;
        Ok(user)
    }

    /// Find user by email
    pub async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>> {
        let email_owned = email.to_string();
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM user WHERE email = $email LIMIT 1")
            .bind(("email", email_owned))
            .await?;
        let users: Vec<User> = result.take(0)?;
        Ok(users.into_iter().next())
    }

    /// Create a user with an already-hashed password (seed provisioning)
    ///
    /// The password hash is bound explicitly because the model never
    /// serializes it.
    pub async fn create(
        &self,
        email: &str,
        password_hash: &str,
        role: UserRole,
    ) -> RepoResult<User> {
        let now = now_millis();
        let mut result = self
            .base
            .db()
            .query(
                r#"CREATE user SET
                    email = $email,
                    password = $password,
                    role = $role,
                    created_at = $now,
                    updated_at = $now
                RETURN AFTER"#,
            )
            .bind(("email", email.to_string()))
            .bind(("password", password_hash.to_string()))
            .bind(("role", role))
            .bind(("now", now))
            .await?;

        let created: Option<User> = result.take(0)?;
        created.ok_or_else(|| RepoError::Database("Failed to create user".to_string()))
    }
}
