//! Shared response bodies for API handlers.
//!
//! Mutating routes answer with a short `{ "message": ... }` body rather than
//! the affected record. The helpers here pair each message with its status
//! code so every handler reports success the same way.

use axum::http::StatusCode;
use axum::Json;
use serde::Serialize;
use spacefleet_db::models::spacecraft::Spacecraft;

pub const MSG_CREATED: &str = "created";
pub const MSG_ACCEPTED: &str = "accepted";
pub const MSG_TABLES_CREATED: &str = "tables created";

/// `{ "message": ... }` body used by success and error responses alike.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Status plus message body, ready to return from a handler.
pub type MessageReply = (StatusCode, Json<MessageResponse>);

pub fn reply(status: StatusCode, message: &'static str) -> MessageReply {
    (status, Json(MessageResponse { message }))
}

/// 201 `{ "message": "created" }`
pub fn created() -> MessageReply {
    reply(StatusCode::CREATED, MSG_CREATED)
}

/// 202 `{ "message": "accepted" }`
pub fn accepted() -> MessageReply {
    reply(StatusCode::ACCEPTED, MSG_ACCEPTED)
}

/// Body of `GET /spacecrafts`.
///
/// `number_of_spacecrafts` counts every stored spacecraft, not just the ones
/// matching the request's filters.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SpacecraftPage {
    pub records: Vec<Spacecraft>,
    pub number_of_spacecrafts: i64,
}
