//! Route definitions for the `/api/comments` resource.

use axum::routing::{delete, get, put};
use axum::Router;

use crate::handlers::comment;
use crate::state::AppState;

/// Routes mounted at `/comments`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(comment::list).post(comment::create))
        .route("/project/{project_id}", get(comment::list_for_project))
        .route("/report/{report_id}", get(comment::list_for_report))
        .route("/user/{user_id}", delete(comment::delete_all_for_user))
        .route("/{id}", put(comment::update).delete(comment::delete))
}
