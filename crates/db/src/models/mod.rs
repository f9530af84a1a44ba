//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO and the validated record it turns into
//! - A `Deserialize` update DTO holding only the fields a client may change

pub mod astronaut;
pub mod spacecraft;
