//! Field rules for the spacecraft entity.
//!
//! The store keeps spacecraft in the `spacecrafts` table; this module only
//! knows the constraints a record must satisfy before it gets there.

use crate::error::CoreError;
use crate::validation::{validate_min, validate_name};

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

/// Smallest accepted `maxSpeed`.
pub const MIN_MAX_SPEED: f64 = 1001.0;

/// Smallest accepted `mass`.
pub const MIN_MASS: f64 = 201.0;

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

pub fn validate_max_speed(value: f64) -> Result<(), CoreError> {
    validate_min("maxSpeed", value, MIN_MAX_SPEED)
}

pub fn validate_mass(value: f64) -> Result<(), CoreError> {
    validate_min("mass", value, MIN_MASS)
}

/// Validate a complete spacecraft record, reporting the first violation.
pub fn validate_spacecraft(name: &str, max_speed: f64, mass: f64) -> Result<(), CoreError> {
    validate_name(name)?;
    validate_max_speed(max_speed)?;
    validate_mass(mass)
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
