//! Route definitions for the `/api/projects` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::project;
use crate::state::AppState;

/// Routes mounted at `/projects`. Static segments (`insertMany`, `summary`,
/// `deleteAll`) take priority over the `{id}` capture.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(project::list).post(project::create))
        .route("/insertMany", post(project::insert_many))
        .route("/summary", get(project::summary))
        .route("/deleteAll", delete(project::delete_all))
        .route("/{id}", get(project::get_by_id))
}
