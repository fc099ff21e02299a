//! Server state
//!
//! Holds the shared service handles every request needs: configuration,
//! database, JWT service and password hasher. Cloning is cheap (Arc).

use std::path::PathBuf;
use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::auth::{AuthService, JwtService, PasswordHasher};
use crate::core::Config;
use crate::db;
use crate::db::models::UserRole;
use crate::db::repository::UserRepository;
use shared::{AppError, AppResult};

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration (immutable for the process lifetime)
    pub config: Config,
    /// Embedded database handle
    pub db: Surreal<Db>,
    /// JWT token service
    pub jwt_service: Arc<JwtService>,
    /// Password hasher with configured cost
    pub password_hasher: Arc<PasswordHasher>,
}

impl ServerState {
    /// Initialize state for production use: open the RocksDB database under
    /// the data directory, apply schema, seed the admin user
    pub async fn initialize(config: &Config) -> AppResult<Self> {
        let db_dir = PathBuf::from(&config.data_dir).join("database");
        std::fs::create_dir_all(&db_dir)
            .map_err(|e| AppError::internal(format!("Failed to create data directory: {e}")))?;

        let db_path = db_dir.join("hr-admin.db");
        let db = db::connect(&db_path.to_string_lossy()).await?;

        Self::with_db(config.clone(), db).await
    }

    /// Build state on an already-open database (also used by tests with the
    /// in-memory engine)
    pub async fn with_db(config: Config, db: Surreal<Db>) -> AppResult<Self> {
        db::schema::define(&db).await?;

        let state = Self {
            jwt_service: Arc::new(JwtService::with_config(config.jwt.clone())),
            password_hasher: Arc::new(PasswordHasher::new(config.bcrypt_cost)),
            config,
            db,
        };

        state.seed_admin_user().await?;
        Ok(state)
    }

    /// Authentication service bound to this state
    pub fn auth_service(&self) -> AuthService {
        AuthService::new(
            self.db.clone(),
            self.jwt_service.clone(),
            self.password_hasher.clone(),
        )
    }

    /// Provision the admin user from ADMIN_EMAIL / ADMIN_PASSWORD
    ///
    /// Runs once: an existing user with the configured email wins.
    async fn seed_admin_user(&self) -> AppResult<()> {
        let (Some(email), Some(password)) =
            (&self.config.admin_email, &self.config.admin_password)
        else {
            return Ok(());
        };

        let users = UserRepository::new(self.db.clone());
        if users.find_by_email(email).await?.is_some() {
            return Ok(());
        }

        let digest = self.password_hasher.hash(password)?;
        let user = users.create(email, &digest, UserRole::Admin).await?;
        tracing::info!(user_id = %user.id_string(), email = %email, "Seeded admin user");
        Ok(())
    }
}
