//! Handlers for the `/astronauts` resource.
//!
//! Astronauts are nested under spacecraft:
//! `/spacecrafts/{sid}/astronauts[/{aid}]`
//!
//! The collection routes answer a missing spacecraft with `not found`; the
//! single-astronaut routes say which of the two records is missing.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use spacefleet_db::models::astronaut::{Astronaut, CreateAstronaut, UpdateAstronaut};
use spacefleet_db::repositories::AstronautRepo;

use crate::error::{AppError, AppResult, ASTRONAUT_NOT_FOUND, NOT_FOUND, SPACECRAFT_NOT_FOUND};
use crate::handlers::{ensure_astronaut, ensure_spacecraft, update_body};
use crate::response::{accepted, created, MessageReply};
use crate::state::AppState;

/// GET /spacecrafts/{sid}/astronauts
pub async fn list_by_spacecraft(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> AppResult<Json<Vec<Astronaut>>> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, NOT_FOUND).await?;
    let astronauts = AstronautRepo::list_by_spacecraft(&state.pool, spacecraft.id).await?;
    Ok(Json(astronauts))
}

/// POST /spacecrafts/{sid}/astronauts
///
/// The new astronaut always belongs to the spacecraft in the path; a
/// `spacecraftId` in the body is ignored.
pub async fn create(
    State(state): State<AppState>,
    Path(sid): Path<String>,
    payload: Result<Json<CreateAstronaut>, JsonRejection>,
) -> AppResult<MessageReply> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, NOT_FOUND).await?;
    let Json(input) = payload?;
    let record = input.validate(spacecraft.id)?;
    let astronaut = AstronautRepo::create(&state.pool, &record).await?;

    tracing::info!(
        spacecraft_id = spacecraft.id,
        astronaut_id = astronaut.id,
        role = %record.role,
        "Astronaut created"
    );
    Ok(created())
}

/// GET /spacecrafts/{sid}/astronauts/{aid}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path((sid, aid)): Path<(String, String)>,
) -> AppResult<Json<Astronaut>> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, SPACECRAFT_NOT_FOUND).await?;
    let astronaut =
        ensure_astronaut(&state.pool, spacecraft.id, &aid, ASTRONAUT_NOT_FOUND).await?;
    Ok(Json(astronaut))
}

/// PUT /spacecrafts/{sid}/astronauts/{aid}
///
/// Partial update of `name` and `role`.
pub async fn update(
    State(state): State<AppState>,
    Path((sid, aid)): Path<(String, String)>,
    payload: Result<Json<UpdateAstronaut>, JsonRejection>,
) -> AppResult<MessageReply> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, SPACECRAFT_NOT_FOUND).await?;
    let astronaut =
        ensure_astronaut(&state.pool, spacecraft.id, &aid, ASTRONAUT_NOT_FOUND).await?;
    let input = update_body(payload)?;
    input.validate()?;

    AstronautRepo::update(&state.pool, spacecraft.id, astronaut.id, &input)
        .await?
        .ok_or(AppError::NotFound(ASTRONAUT_NOT_FOUND))?;

    tracing::info!(
        spacecraft_id = spacecraft.id,
        astronaut_id = astronaut.id,
        "Astronaut updated"
    );
    Ok(accepted())
}

/// DELETE /spacecrafts/{sid}/astronauts/{aid}
pub async fn delete(
    State(state): State<AppState>,
    Path((sid, aid)): Path<(String, String)>,
) -> AppResult<MessageReply> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, SPACECRAFT_NOT_FOUND).await?;
    let astronaut =
        ensure_astronaut(&state.pool, spacecraft.id, &aid, ASTRONAUT_NOT_FOUND).await?;

    if !AstronautRepo::delete(&state.pool, spacecraft.id, astronaut.id).await? {
        return Err(AppError::NotFound(ASTRONAUT_NOT_FOUND));
    }

    tracing::info!(
        spacecraft_id = spacecraft.id,
        astronaut_id = astronaut.id,
        "Astronaut deleted"
    );
    Ok(accepted())
}
