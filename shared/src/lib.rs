//! Types shared between the admin server and its clients.
//!
//! - [`error`] - unified error codes, categories and API response envelope
//! - [`patch`] - tagged partial-update value for PATCH-style payloads
//! - [`client`] - auth request/response DTOs

pub mod client;
pub mod error;
pub mod patch;

pub use client::{LoginRequest, LoginResponse, UserInfo};
pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use patch::Patch;
