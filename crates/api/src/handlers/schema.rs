//! Handler for rebuilding the schema.

use axum::extract::State;
use axum::http::StatusCode;
use spacefleet_db::schema::{self, SyncMode};

use crate::error::AppResult;
use crate::response::{reply, MessageReply, MSG_TABLES_CREATED};
use crate::state::AppState;

/// GET /sync
///
/// Drops and recreates both tables. All stored data is lost.
pub async fn sync(State(state): State<AppState>) -> AppResult<MessageReply> {
    tracing::warn!("Recreating schema, all spacecraft and astronauts will be dropped");
    let dialect = schema::sync(&state.pool, SyncMode::Recreate).await?;
    tracing::info!(?dialect, "Tables recreated");
    Ok(reply(StatusCode::CREATED, MSG_TABLES_CREATED))
}
