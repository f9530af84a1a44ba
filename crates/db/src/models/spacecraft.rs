//! Spacecraft entity model and DTOs.

use serde::{Deserialize, Deserializer, Serialize};
use spacefleet_core::error::CoreError;
use spacefleet_core::spacecraft::{validate_mass, validate_max_speed, validate_spacecraft};
use spacefleet_core::types::DbId;
use spacefleet_core::validation::{require, validate_name};
use sqlx::FromRow;

use crate::models::astronaut::Astronaut;

/// A row from the `spacecrafts` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Spacecraft {
    pub id: DbId,
    pub name: String,
    pub max_speed: f64,
    pub mass: f64,
}

/// A spacecraft with its crew embedded under `astronauts`.
#[derive(Debug, Clone, Serialize)]
pub struct SpacecraftWithAstronauts {
    #[serde(flatten)]
    pub spacecraft: Spacecraft,
    pub astronauts: Vec<Astronaut>,
}

/// DTO for creating a spacecraft.
///
/// Every field is optional at the serde level so that a missing one is
/// reported by [`CreateSpacecraft::validate`] like any other constraint.
/// Unknown keys, `id` included, are dropped.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpacecraft {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub max_speed: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub mass: Option<f64>,
}

impl CreateSpacecraft {
    /// Check required fields and constraints, yielding an insertable record.
    pub fn validate(self) -> Result<NewSpacecraft, CoreError> {
        let name = require("name", self.name)?;
        let max_speed = require("maxSpeed", self.max_speed)?;
        let mass = require("mass", self.mass)?;
        validate_spacecraft(&name, max_speed, mass)?;
        Ok(NewSpacecraft {
            name,
            max_speed,
            mass,
        })
    }
}

/// A spacecraft that passed validation and may be inserted.
#[derive(Debug, Clone, PartialEq)]
pub struct NewSpacecraft {
    pub name: String,
    pub max_speed: f64,
    pub mass: f64,
}

/// DTO for a partial spacecraft update.
///
/// Only `name`, `maxSpeed` and `mass` can change; anything else in the body
/// is ignored.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpacecraft {
    pub name: Option<String>,
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub max_speed: Option<f64>,
    #[serde(default, deserialize_with = "number_or_numeric_text")]
    pub mass: Option<f64>,
}

impl UpdateSpacecraft {
    /// Validate the fields that are present.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Some(name) = &self.name {
            validate_name(name)?;
        }
        if let Some(max_speed) = self.max_speed {
            validate_max_speed(max_speed)?;
        }
        if let Some(mass) = self.mass {
            validate_mass(mass)?;
        }
        Ok(())
    }

    /// Client-facing names of the fields this update touches.
    pub fn changed_fields(&self) -> Vec<&'static str> {
        [
            ("name", self.name.is_some()),
            ("maxSpeed", self.max_speed.is_some()),
            ("mass", self.mass.is_some()),
        ]
        .into_iter()
        .filter_map(|(field, present)| present.then_some(field))
        .collect()
    }
}

/* --------------------------------------------------------------------------
Numeric body fields
-------------------------------------------------------------------------- */

/// A numeric field as clients send it: a JSON number or a string holding one.
#[derive(Deserialize)]
#[serde(untagged)]
enum NumberInput {
    Number(f64),
    Text(String),
}

impl NumberInput {
    /// Text is trimmed and parsed; blank text counts as zero. Text that is
    /// not a number becomes NaN, which the field rules reject.
    fn into_f64(self) -> f64 {
        match self {
            NumberInput::Number(value) => value,
            NumberInput::Text(text) => {
                let text = text.trim();
                if text.is_empty() {
                    0.0
                } else {
                    text.parse().unwrap_or(f64::NAN)
                }
            }
        }
    }
}

fn number_or_numeric_text<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<NumberInput>::deserialize(deserializer)?.map(NumberInput::into_f64))
}
