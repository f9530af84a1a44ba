//! Route definitions for the `/spacecrafts` resource.
//!
//! Also nests astronaut routes under `/spacecrafts/{sid}/astronauts`.

use axum::routing::get;
use axum::Router;

use crate::handlers::{astronaut, spacecraft};
use crate::state::AppState;

/// Routes mounted at `/spacecrafts`.
///
/// ```text
/// GET    /                                  -> list
/// POST   /                                  -> create
/// GET    /{sid}                             -> get_by_id
/// PUT    /{sid}                             -> update
/// DELETE /{sid}                             -> delete
///
/// GET    /{sid}/astronauts                  -> list_by_spacecraft
/// POST   /{sid}/astronauts                  -> create
/// GET    /{sid}/astronauts/{aid}            -> get_by_id
/// PUT    /{sid}/astronauts/{aid}            -> update
/// DELETE /{sid}/astronauts/{aid}            -> delete
/// ```
pub fn router() -> Router<AppState> {
    let astronaut_routes = Router::new()
        .route(
            "/",
            get(astronaut::list_by_spacecraft).post(astronaut::create),
        )
        .route(
            "/{aid}",
            get(astronaut::get_by_id)
                .put(astronaut::update)
                .delete(astronaut::delete),
        );

    Router::new()
        .route("/", get(spacecraft::list).post(spacecraft::create))
        .route(
            "/{sid}",
            get(spacecraft::get_by_id)
                .put(spacecraft::update)
                .delete(spacecraft::delete),
        )
        .nest("/{sid}/astronauts", astronaut_routes)
}
