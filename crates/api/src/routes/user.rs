//! Route definitions for the `/api/users` resource.

use axum::routing::{delete, get, post};
use axum::Router;

use crate::handlers::user;
use crate::state::AppState;

/// Routes mounted at `/users`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(user::list).post(user::register))
        .route("/login", post(user::login))
        .route("/{id}", delete(user::delete))
}
