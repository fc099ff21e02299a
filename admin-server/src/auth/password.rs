//! Password hashing
//!
//! Thin wrapper over bcrypt with a configured cost factor. The cost is
//! validated (>= 10) at startup; verification delegates constant-time
//! comparison to the bcrypt implementation.

use shared::{AppError, AppResult};

/// Password hasher with a fixed cost factor
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// Hash a plaintext password
    pub fn hash(&self, plain: &str) -> AppResult<String> {
        bcrypt::hash(plain, self.cost)
            .map_err(|e| AppError::internal(format!("Failed to hash password: {e}")))
    }

    /// Verify a plaintext password against a stored digest
    pub fn verify(&self, plain: &str, digest: &str) -> AppResult<bool> {
        bcrypt::verify(plain, digest)
            .map_err(|e| AppError::internal(format!("Password verification failed: {e}")))
    }
}
