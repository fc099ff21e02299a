//! Input validation helpers
//!
//! Centralized text length constants and a collector that gathers every
//! violated field before failing, so clients can fix all issues in a single
//! round trip.

use shared::AppError;
use std::collections::HashMap;

// ── Text length limits ──────────────────────────────────────────────

/// Employee first/last name
pub const MAX_NAME_LEN: usize = 50;

/// Department name, employee position
pub const MAX_TITLE_LEN: usize = 100;

/// Email addresses
pub const MAX_EMAIL_LEN: usize = 100;

/// Phone numbers
pub const MAX_PHONE_LEN: usize = 20;

/// Department description
pub const MAX_DESCRIPTION_LEN: usize = 500;

// ── Field error collector ───────────────────────────────────────────

/// Accumulates per-field validation messages
#[derive(Debug, Default)]
pub struct FieldErrors {
    fields: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Ok if nothing was collected, otherwise a validation error carrying
    /// every field message under `details["fields"]`
    pub fn into_result(self) -> Result<(), AppError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(AppError::validation_fields(self.fields))
        }
    }
}

// ── Validation helpers ──────────────────────────────────────────────

/// Require a non-empty string within the length limit
pub fn check_required_text(value: &str, field: &str, max_len: usize, errors: &mut FieldErrors) {
    if value.trim().is_empty() {
        errors.push(field, format!("{field} must not be empty"));
    } else if value.len() > max_len {
        errors.push(
            field,
            format!("{field} is too long ({} chars, max {max_len})", value.len()),
        );
    }
}

/// Check an optional string, if present, against the length limit
pub fn check_optional_text(
    value: Option<&str>,
    field: &str,
    max_len: usize,
    errors: &mut FieldErrors,
) {
    if let Some(v) = value
        && v.len() > max_len
    {
        errors.push(
            field,
            format!("{field} is too long ({} chars, max {max_len})", v.len()),
        );
    }
}
