//! Field rules and the role enum for the astronaut entity.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;
use crate::validation::validate_name;

/// Crew role. Stored by its upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Commander,
    Pilot,
    Captain,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Commander, Role::Pilot, Role::Captain];

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Commander => "COMMANDER",
            Role::Pilot => "PILOT",
            Role::Captain => "CAPTAIN",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = CoreError;

    /// Matching is exact: `pilot` is not a role.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Role::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| {
                let valid: Vec<&str> = Role::ALL.iter().map(|r| r.as_str()).collect();
                CoreError::validation(
                    "role",
                    format!("'{s}' is not one of {}", valid.join(", ")),
                )
            })
    }
}

pub fn validate_role(value: &str) -> Result<Role, CoreError> {
    value.parse()
}

/// Validate a complete astronaut record, reporting the first violation.
pub fn validate_astronaut(name: &str, role: &str) -> Result<Role, CoreError> {
    validate_name(name)?;
    validate_role(role)
}
