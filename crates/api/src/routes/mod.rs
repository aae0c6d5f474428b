pub mod comment;
pub mod health;
pub mod project;
pub mod report;
pub mod user;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 list (GET), create (POST, admin)
/// /projects/insertMany                      bulk import (POST, admin)
/// /projects/summary                         portfolio metrics (GET)
/// /projects/deleteAll                       wipe (DELETE, admin)
/// /projects/{id}                            detail with derived metrics (GET)
///
/// /reports                                  create (POST, auth), wipe (DELETE, admin)
/// /reports/project/{project_id}             approved reports (GET)
/// /reports/project/admin/{project_id}       all reports (GET, admin)
/// /reports/project/admin/approve/{id}       approve (POST, admin)
/// /reports/user/{user_id}                   per-user wipe (DELETE, admin)
/// /reports/{id}                             update (PUT, auth), delete (DELETE, auth)
///
/// /comments                                 list (GET), create (POST, auth)
/// /comments/project/{project_id}            by project (GET)
/// /comments/report/{report_id}              by report (GET)
/// /comments/user/{user_id}                  per-user wipe (DELETE, admin)
/// /comments/{id}                            update (PUT, auth), delete (DELETE, auth)
///
/// /users                                    list (GET, admin), register (POST)
/// /users/login                              login (POST)
/// /users/{id}                               delete with cascade (DELETE, admin)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project::router())
        .nest("/reports", report::router())
        .nest("/comments", comment::router())
        .nest("/users", user::router())
}
