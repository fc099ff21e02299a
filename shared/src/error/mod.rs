//! Unified error system for the admin server
//!
//! - [`ErrorCode`]: stable machine-readable codes for every failure kind
//! - [`ErrorCategory`]: classification of errors by domain
//! - [`AppError`]: error value carrying code, message and structured details
//! - [`ApiResponse`]: uniform API response envelope
//!
//! # Error Code Ranges
//!
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 3xxx: Department errors
//! - 4xxx: Employee errors
//! - 9xxx: System errors
//!
//! # Example
//!
//! ```
//! use shared::error::{AppError, ErrorCode, ApiResponse};
//!
//! let err = AppError::with_message(ErrorCode::DepartmentNotFound, "Department abc not found");
//! let response = ApiResponse::<()>::error(&err);
//! assert_eq!(response.code, Some(3001));
//! ```

mod category;
mod codes;
mod http;
mod types;

pub use category::ErrorCategory;
pub use codes::{ErrorCode, InvalidErrorCode};
pub use types::{ApiResponse, AppError, AppResult};
