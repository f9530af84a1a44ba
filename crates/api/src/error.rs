use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use spacefleet_core::error::CoreError;

use crate::response::reply;

/// 404 message on the spacecraft routes and the crew collection routes.
pub const NOT_FOUND: &str = "not found";
/// 404 message on single-astronaut routes when the spacecraft is missing.
pub const SPACECRAFT_NOT_FOUND: &str = "Spacecraft not found";
/// 404 message on single-astronaut routes when the astronaut is missing.
pub const ASTRONAUT_NOT_FOUND: &str = "Astronaut not found";

/// 500 message for every failure except a failed listing.
pub const MSG_SOME_ERROR: &str = "some error occured";
/// 500 message for a failed `GET /spacecrafts`.
pub const MSG_SERVER_ERROR: &str = "Server error";

/// Application-level error type for HTTP handlers.
///
/// Clients only ever see two outcomes: a 404 carrying a route-specific
/// label, or a 500 with a generic message. The variants exist so that logs
/// can tell the causes apart.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `spacefleet_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A database error from sqlx.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// The request body was not JSON of the expected shape.
    #[error("Unreadable request body: {0}")]
    Body(#[from] JsonRejection),

    /// The addressed record does not exist in the route's scope.
    #[error("{0}")]
    NotFound(&'static str),

    /// The spacecraft listing query failed.
    #[error("Listing failed: {0}")]
    Listing(sqlx::Error),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound(label) => (StatusCode::NOT_FOUND, *label),

            AppError::Core(CoreError::Validation { field, reason }) => {
                tracing::warn!(field, %reason, "Validation failed");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SOME_ERROR)
            }

            AppError::Body(rejection) => {
                tracing::warn!(error = %rejection, "Rejected request body");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SOME_ERROR)
            }

            AppError::Database(err) => {
                tracing::error!(error = %err, "Database error");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SOME_ERROR)
            }

            AppError::Listing(err) => {
                tracing::error!(error = %err, "Spacecraft listing failed");
                (StatusCode::INTERNAL_SERVER_ERROR, MSG_SERVER_ERROR)
            }
        };

        reply(status, message).into_response()
    }
}
