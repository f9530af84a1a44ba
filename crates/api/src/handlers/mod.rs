pub mod astronaut;
pub mod schema;
pub mod spacecraft;

use axum::extract::rejection::JsonRejection;
use axum::Json;
use spacefleet_core::types::DbId;
use spacefleet_db::models::astronaut::Astronaut;
use spacefleet_db::models::spacecraft::Spacecraft;
use spacefleet_db::repositories::{AstronautRepo, SpacecraftRepo};
use spacefleet_db::DbPool;

use crate::error::{AppError, AppResult};

/// Parse an id path segment. A segment that is not an integer cannot name
/// any record, so callers treat `None` as not found.
pub(crate) fn parse_id(raw: &str) -> Option<DbId> {
    raw.parse().ok()
}

/// Unwrap a partial-update body. A request that is not JSON at all carries
/// no fields and leaves the record unchanged; malformed JSON is still
/// rejected.
pub(crate) fn update_body<T: Default>(payload: Result<Json<T>, JsonRejection>) -> AppResult<T> {
    match payload {
        Ok(Json(input)) => Ok(input),
        Err(JsonRejection::MissingJsonContentType(_)) => Ok(T::default()),
        Err(rejection) => Err(rejection.into()),
    }
}

/// Load the spacecraft addressed by `raw_id`, failing with `not_found`.
pub(crate) async fn ensure_spacecraft(
    pool: &DbPool,
    raw_id: &str,
    not_found: &'static str,
) -> AppResult<Spacecraft> {
    let id = parse_id(raw_id).ok_or(AppError::NotFound(not_found))?;
    SpacecraftRepo::find_by_id(pool, id)
        .await?
        .ok_or(AppError::NotFound(not_found))
}

/// Load the astronaut addressed by `raw_id` from one spacecraft's crew,
/// failing with `not_found`.
pub(crate) async fn ensure_astronaut(
    pool: &DbPool,
    spacecraft_id: DbId,
    raw_id: &str,
    not_found: &'static str,
) -> AppResult<Astronaut> {
    let id = parse_id(raw_id).ok_or(AppError::NotFound(not_found))?;
    AstronautRepo::find_in_spacecraft(pool, spacecraft_id, id)
        .await?
        .ok_or(AppError::NotFound(not_found))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_integer_segments_are_ids() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("-1"), Some(-1));
        assert_eq!(parse_id("42abc"), None);
        assert_eq!(parse_id("4.2"), None);
        assert_eq!(parse_id(""), None);
    }
}
