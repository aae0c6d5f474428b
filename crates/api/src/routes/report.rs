//! Route definitions for the `/api/reports` resource.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::report;
use crate::state::AppState;

/// Routes mounted at `/reports`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(report::create).delete(report::delete_all))
        .route("/project/{project_id}", get(report::list_for_project))
        .route(
            "/project/admin/{project_id}",
            get(report::list_for_project_admin),
        )
        .route(
            "/project/admin/approve/{report_id}",
            post(report::approve),
        )
        .route("/user/{user_id}", delete(report::delete_all_for_user))
        .route("/{id}", put(report::update).delete(report::delete))
}
