//! Domain layer for the spacefleet service.
//!
//! Holds everything that does not touch I/O: shared types, the field rules
//! for spacecraft and astronauts, and the list-query builder that turns raw
//! query-string parameters into a structured request for the store.

pub mod astronaut;
pub mod error;
pub mod list_query;
pub mod spacecraft;
pub mod types;
pub mod validation;
