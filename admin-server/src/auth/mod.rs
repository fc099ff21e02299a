//! Authentication and authorization
//!
//! - [`JwtService`] - token issuance and verification
//! - [`PasswordHasher`] - bcrypt with configured cost
//! - [`AuthService`] - login and credential validation
//! - [`require_auth`] / [`require_role`] - request gate middleware
//! - [`CurrentUser`] - authenticated identity, threaded as a value

pub mod extractor;
pub mod jwt;
pub mod middleware;
pub mod password;
pub mod service;

pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{ADMIN_ONLY, require_auth, require_role};
pub use password::PasswordHasher;
pub use service::AuthService;
