//! Input validators shared by the repositories.
//!
//! These run before the storage boundary so malformed input is reported as
//! [`CoreError::Validation`] rather than leaking driver errors. Constraint
//! enforcement proper (uniqueness, foreign keys) stays in the database.

use validator::ValidateEmail;

use crate::error::CoreError;

/// Validate that a required text field is present and non-empty.
///
/// Whitespace-only values count as empty.
pub fn validate_required(field: &'static str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate that an email address is syntactically well-formed.
///
/// Uniqueness is enforced separately by the `uq_clients_email` index.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if !email.validate_email() {
        return Err(CoreError::Validation(format!(
            "'{email}' is not a valid email address"
        )));
    }
    Ok(())
}

/// Validate that an appointment duration is a positive number of minutes.
pub fn validate_duration(minutes: i64) -> Result<(), CoreError> {
    if minutes <= 0 {
        return Err(CoreError::Validation(
            "duration must be a positive number of minutes".to_string(),
        ));
    }
    Ok(())
}
