//! Astronaut entity model and DTOs.

use serde::{Deserialize, Serialize};
use spacefleet_core::astronaut::{validate_astronaut, validate_role, Role};
use spacefleet_core::error::CoreError;
use spacefleet_core::types::DbId;
use spacefleet_core::validation::{require, validate_name};
use sqlx::FromRow;

/// A row from the `astronauts` table.
///
/// `spacecraft_id` is `None` once the owning spacecraft has been deleted.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Astronaut {
    pub id: DbId,
    pub name: String,
    pub role: String,
    pub spacecraft_id: Option<DbId>,
}

/// DTO for creating an astronaut under a spacecraft.
///
/// The owning spacecraft always comes from the URL path, never the body.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateAstronaut {
    pub name: Option<String>,
    pub role: Option<String>,
}

impl CreateAstronaut {
    /// Check required fields and constraints, binding the record to its
    /// spacecraft.
    pub fn validate(self, spacecraft_id: DbId) -> Result<NewAstronaut, CoreError> {
        let name = require("name", self.name)?;
        let role = require("role", self.role)?;
        let role = validate_astronaut(&name, &role)?;
        Ok(NewAstronaut {
            spacecraft_id,
            name,
            role,
        })
    }
}

/// An astronaut that passed validation and may be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewAstronaut {
    pub spacecraft_id: DbId,
    pub name: String,
    pub role: Role,
}

/// DTO for a partial astronaut update. Only `name` and `role` can change.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateAstronaut {
    pub name: Option<String>,
    pub role: Option<String>,
}

impl UpdateAstronaut {
    /// Validate the fields that are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(role) = &self.role {
            validate_role(role)?;
        }
        Ok(())
    }
}
