//! HR Admin Server - departments and employees behind bearer-token auth
//!
//! # Module structure
//!
//! ```text
//! admin-server/src/
//! ├── core/          # Config, state, HTTP server
//! ├── auth/          # JWT, password hashing, login, middleware
//! ├── services/      # Business rules (uniqueness, references, parsing)
//! ├── api/           # HTTP routes and handlers
//! ├── db/            # Embedded SurrealDB: schema, models, repositories
//! ├── routes/        # Router assembly and middleware stack
//! └── utils/         # Validation helpers, logger
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod routes;
pub mod services;
pub mod utils;

// Re-export public types
pub use auth::{AuthService, CurrentUser, JwtConfig, JwtService, PasswordHasher};
pub use core::{Config, Server, ServerState};

// Re-export unified error types from shared
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

// Re-export logger init
pub use utils::logger::init_logger;
