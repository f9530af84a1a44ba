//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&DbPool` as the first argument.

pub mod astronaut_repo;
pub mod spacecraft_repo;

pub use astronaut_repo::AstronautRepo;
pub use spacecraft_repo::SpacecraftRepo;
