//! Field-level checks shared by both entity kinds.

use crate::error::CoreError;

/// Name lengths are inclusive and counted in characters, not bytes.
pub const NAME_MIN_LEN: usize = 4;
pub const NAME_MAX_LEN: usize = 100;

/// Unwrap a required field, failing with a validation error when absent.
pub fn require<T>(field: &'static str, value: Option<T>) -> Result<T, CoreError> {
    value.ok_or_else(|| CoreError::validation(field, "is required"))
}

/// Check that `value` has between `min` and `max` characters (inclusive).
pub fn validate_length(
    field: &'static str,
    value: &str,
    min: usize,
    max: usize,
) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len < min || len > max {
        return Err(CoreError::validation(
            field,
            format!("length must be between {min} and {max} characters (got {len})"),
        ));
    }
    Ok(())
}

/// Check that `value` is a finite number no smaller than `min`.
pub fn validate_min(field: &'static str, value: f64, min: f64) -> Result<(), CoreError> {
    if !value.is_finite() {
        return Err(CoreError::validation(field, "must be a finite number"));
    }
    if value < min {
        return Err(CoreError::validation(
            field,
            format!("must be at least {min} (got {value})"),
        ));
    }
    Ok(())
}

/// Entity names share one length rule.
pub fn validate_name(value: &str) -> Result<(), CoreError> {
    validate_length("name", value, NAME_MIN_LEN, NAME_MAX_LEN)
}
