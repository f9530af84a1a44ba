pub mod health;
pub mod spacecraft;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the route tree. Everything is mounted at the root.
///
/// Route hierarchy:
///
/// ```text
/// /health                                   liveness + store ping
/// /sync                                     recreate tables (GET)
///
/// /spacecrafts                              list, create
/// /spacecrafts/{sid}                        get, update, delete
/// /spacecrafts/{sid}/astronauts             list, create
/// /spacecrafts/{sid}/astronauts/{aid}       get, update, delete
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .merge(health::router())
        .route("/sync", get(handlers::schema::sync))
        .nest("/spacecrafts", spacecraft::router())
}
