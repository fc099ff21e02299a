//! Authentication Service
//!
//! Credential validation and login. Unknown email and wrong password are
//! indistinguishable from the outside: same error code, same message.

use std::sync::Arc;
use std::time::Duration;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{JwtService, PasswordHasher};
use crate::db::models::User;
use crate::db::repository::UserRepository;
use shared::{AppError, AppResult, LoginResponse};

/// Fixed delay on failed-or-successful login to narrow timing differences
/// between the lookup and verification paths
const AUTH_FIXED_DELAY_MS: u64 = 100;

#[derive(Clone)]
pub struct AuthService {
    users: UserRepository,
    jwt: Arc<JwtService>,
    hasher: Arc<PasswordHasher>,
}

impl AuthService {
    pub fn new(db: Surreal<Db>, jwt: Arc<JwtService>, hasher: Arc<PasswordHasher>) -> Self {
        Self {
            users: UserRepository::new(db),
            jwt,
            hasher,
        }
    }

    /// Pure lookup + compare, no side effects
    ///
    /// Returns the user when the email resolves and the password matches;
    /// `None` in every other case.
    pub async fn validate_credentials(
        &self,
        email: &str,
        password: &str,
    ) -> AppResult<Option<User>> {
        let Some(user) = self.users.find_by_email(email).await? else {
            return Ok(None);
        };

        if self.hasher.verify(password, &user.password)? {
            Ok(Some(user))
        } else {
            Ok(None)
        }
    }

    /// Authenticate and issue a token
    pub async fn login(&self, email: &str, password: &str) -> AppResult<LoginResponse> {
        let result = self.validate_credentials(email, password).await;

        tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

        let user = result?.ok_or_else(|| {
            tracing::warn!(target: "security", email, "Login failed");
            AppError::invalid_credentials()
        })?;

        let user_id = user.id_string();
        let token = self
            .jwt
            .generate_token(&user_id, &user.email, &user.role.to_string())
            .map_err(|e| AppError::internal(format!("Failed to generate token: {e}")))?;

        tracing::info!(user_id = %user_id, email = %user.email, "User logged in");

        Ok(LoginResponse {
            token,
            user: user.to_info(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::JwtConfig;
    use crate::db::models::UserRole;
    use crate::db::{connect_memory, schema};

    async fn test_service() -> AuthService {
        let db = connect_memory().await.unwrap();
        schema::define(&db).await.unwrap();

        let hasher = Arc::new(PasswordHasher::new(4));
        let jwt = Arc::new(JwtService::with_config(JwtConfig {
            secret: "0123456789abcdef0123456789abcdef".to_string(),
            expiration_minutes: 60,
            issuer: "hr-admin-api".to_string(),
        }));

        let users = UserRepository::new(db.clone());
        let digest = hasher.hash("s3cret-password").unwrap();
        users
            .create("admin@example.com", &digest, UserRole::Admin)
            .await
            .unwrap();

        AuthService::new(db, jwt, hasher)
    }

    #[tokio::test]
    async fn test_login_success() {
        let service = test_service().await;
        let response = service
            .login("admin@example.com", "s3cret-password")
            .await
            .unwrap();

        assert!(!response.token.is_empty());
        assert_eq!(response.user.email, "admin@example.com");
        assert_eq!(response.user.role, "ADMIN");

        let claims = service.jwt.validate_token(&response.token).unwrap();
        assert_eq!(claims.email, "admin@example.com");
        assert_eq!(claims.role, "ADMIN");
    }

    #[tokio::test]
    async fn test_login_failures_are_indistinguishable() {
        let service = test_service().await;

        let unknown = service
            .login("nobody@example.com", "anything")
            .await
            .unwrap_err();
        let wrong = service
            .login("admin@example.com", "wrong-password")
            .await
            .unwrap_err();

        assert_eq!(unknown.code, wrong.code);
        assert_eq!(unknown.message, wrong.message);
    }

    #[tokio::test]
    async fn test_validate_credentials_has_no_side_effects() {
        let service = test_service().await;

        let user = service
            .validate_credentials("admin@example.com", "s3cret-password")
            .await
            .unwrap();
        assert!(user.is_some());

        let none = service
            .validate_credentials("admin@example.com", "bad")
            .await
            .unwrap();
        assert!(none.is_none());
    }
}
