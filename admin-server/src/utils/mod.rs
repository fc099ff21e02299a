//! Utility module - validation helpers and logging

pub mod logger;
pub mod validation;

pub use validation::FieldErrors;

use chrono::Utc;

/// Current time as epoch milliseconds, the timestamp convention for all
/// stored records
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
