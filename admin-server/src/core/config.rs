//! Server configuration
//!
//! All settings come from environment variables:
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | HTTP_PORT | 3000 | HTTP API port |
//! | DATA_DIR | /var/lib/hr-admin | Database and file storage directory |
//! | ENVIRONMENT | development | development \| staging \| production |
//! | JWT_SECRET | (required) | Token signing secret, >= 32 chars |
//! | JWT_EXPIRATION_MINUTES | 60 | Token lifetime |
//! | JWT_ISSUER | hr-admin-api | Token issuer claim |
//! | BCRYPT_COST | 12 | Password hash cost factor, >= 10 |
//! | ADMIN_EMAIL / ADMIN_PASSWORD | (optional) | Seed admin credentials |
//! | LOG_LEVEL | info | Default log filter |
//! | LOG_DIR | (optional) | Daily rolling log file directory |

use crate::auth::JwtConfig;
use shared::{AppError, AppResult};

/// Minimum accepted signing secret length
pub const MIN_SECRET_LEN: usize = 32;

/// Minimum accepted bcrypt cost; lower costs are too cheap to brute-force
pub const MIN_BCRYPT_COST: u32 = 10;

#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API port
    pub http_port: u16,
    /// Database and file storage directory
    pub data_dir: String,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// JWT configuration
    pub jwt: JwtConfig,
    /// bcrypt cost factor
    pub bcrypt_cost: u32,
    /// Seed admin credentials, provisioned on first start when set
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    /// Log filter when RUST_LOG is unset
    pub log_level: String,
    /// Optional rolling log file directory
    pub log_dir: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            data_dir: std::env::var("DATA_DIR").unwrap_or_else(|_| "/var/lib/hr-admin".into()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            jwt: JwtConfig {
                secret: std::env::var("JWT_SECRET").unwrap_or_default(),
                expiration_minutes: std::env::var("JWT_EXPIRATION_MINUTES")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(60),
                issuer: std::env::var("JWT_ISSUER").unwrap_or_else(|_| "hr-admin-api".into()),
            },
            bcrypt_cost: std::env::var("BCRYPT_COST")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(12),
            admin_email: std::env::var("ADMIN_EMAIL").ok(),
            admin_password: std::env::var("ADMIN_PASSWORD").ok(),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// Fail fast on unusable security settings
    ///
    /// A missing or short secret and a weak hash cost are startup errors,
    /// never silently defaulted.
    pub fn validate(&self) -> AppResult<()> {
        if self.jwt.secret.len() < MIN_SECRET_LEN {
            return Err(AppError::config(format!(
                "JWT_SECRET must be set and at least {MIN_SECRET_LEN} characters long"
            )));
        }
        if self.bcrypt_cost < MIN_BCRYPT_COST {
            return Err(AppError::config(format!(
                "BCRYPT_COST must be at least {MIN_BCRYPT_COST}"
            )));
        }
        Ok(())
    }

    /// Whether this is a production environment
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Whether this is a development environment
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}
