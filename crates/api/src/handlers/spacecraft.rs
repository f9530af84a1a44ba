//! Handlers for the `/spacecrafts` resource.

use std::collections::HashMap;

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use spacefleet_core::list_query::SpacecraftListQuery;
use spacefleet_db::models::spacecraft::{
    CreateSpacecraft, SpacecraftWithAstronauts, UpdateSpacecraft,
};
use spacefleet_db::repositories::{AstronautRepo, SpacecraftRepo};

use crate::error::{AppError, AppResult, NOT_FOUND};
use crate::handlers::{ensure_spacecraft, update_body};
use crate::response::{accepted, created, MessageReply, SpacecraftPage};
use crate::state::AppState;

/// GET /spacecrafts
///
/// Filters, sorts and pages according to the query string. The total in
/// `numberOfSpacecrafts` ignores the filters.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> AppResult<Json<SpacecraftPage>> {
    let query = SpacecraftListQuery::from_params(&params);
    tracing::debug!(?query, "Spacecraft list query");

    let records = SpacecraftRepo::list(&state.pool, &query)
        .await
        .map_err(AppError::Listing)?;
    let number_of_spacecrafts = SpacecraftRepo::count(&state.pool)
        .await
        .map_err(AppError::Listing)?;

    Ok(Json(SpacecraftPage {
        records,
        number_of_spacecrafts,
    }))
}

/// POST /spacecrafts
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateSpacecraft>, JsonRejection>,
) -> AppResult<MessageReply> {
    let Json(input) = payload?;
    let record = input.validate()?;
    let spacecraft = SpacecraftRepo::create(&state.pool, &record).await?;

    tracing::info!(spacecraft_id = spacecraft.id, name = %spacecraft.name, "Spacecraft created");
    Ok(created())
}

/// GET /spacecrafts/{sid}
///
/// Returns the spacecraft with its crew embedded.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> AppResult<Json<SpacecraftWithAstronauts>> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, NOT_FOUND).await?;
    let astronauts = AstronautRepo::list_by_spacecraft(&state.pool, spacecraft.id).await?;
    Ok(Json(SpacecraftWithAstronauts {
        spacecraft,
        astronauts,
    }))
}

/// PUT /spacecrafts/{sid}
///
/// Partial update of `name`, `maxSpeed` and `mass`.
pub async fn update(
    State(state): State<AppState>,
    Path(sid): Path<String>,
    payload: Result<Json<UpdateSpacecraft>, JsonRejection>,
) -> AppResult<MessageReply> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, NOT_FOUND).await?;
    let input = update_body(payload)?;
    input.validate()?;

    SpacecraftRepo::update(&state.pool, spacecraft.id, &input)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;

    tracing::info!(
        spacecraft_id = spacecraft.id,
        fields = ?input.changed_fields(),
        "Spacecraft updated"
    );
    Ok(accepted())
}

/// DELETE /spacecrafts/{sid}
///
/// The crew is left in place with no spacecraft.
pub async fn delete(
    State(state): State<AppState>,
    Path(sid): Path<String>,
) -> AppResult<MessageReply> {
    let spacecraft = ensure_spacecraft(&state.pool, &sid, NOT_FOUND).await?;
    if !SpacecraftRepo::delete(&state.pool, spacecraft.id).await? {
        return Err(AppError::NotFound(NOT_FOUND));
    }

    tracing::info!(spacecraft_id = spacecraft.id, "Spacecraft deleted");
    Ok(accepted())
}
