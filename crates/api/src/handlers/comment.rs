//! Handlers for the `/api/comments` resource.
//!
//! Comments are public the moment they exist; there is no approval gate.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use civitrack_core::error::CoreError;
use civitrack_core::types::DbId;
use civitrack_db::models::comment::{Comment, CreateComment, UpdateComment};
use civitrack_db::repositories::{CommentRepo, ReportRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/comments
// ---------------------------------------------------------------------------

/// List all comments, newest first.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    let comments = CommentRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// POST /api/comments
// ---------------------------------------------------------------------------

/// Add a comment to a report.
///
/// The referenced report and author must exist at creation time; the columns
/// themselves carry no foreign keys, so this check is the only referential
/// guard.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateComment>,
) -> AppResult<Json<DataResponse<Comment>>> {
    input.validate().map_err(AppError::from_validation)?;

    ReportRepo::find_by_id(&state.pool, input.report_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: input.report_id,
        }))?;
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    let comment = CommentRepo::create(&state.pool, &input).await?;
    tracing::info!(id = comment.id, report_id = comment.report_id, "Comment added");
    Ok(Json(DataResponse { data: comment }))
}

// ---------------------------------------------------------------------------
// GET /api/comments/project/{project_id}
// ---------------------------------------------------------------------------

/// Comments under any report of a project, oldest first.
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    let comments = CommentRepo::list_for_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// GET /api/comments/report/{report_id}
// ---------------------------------------------------------------------------

/// Comments under one report, oldest first.
pub async fn list_for_report(
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Comment>>>> {
    let comments = CommentRepo::list_for_report(&state.pool, report_id).await?;
    Ok(Json(DataResponse { data: comments }))
}

// ---------------------------------------------------------------------------
// PUT /api/comments/{id}
// ---------------------------------------------------------------------------

/// Full-record replace of a comment's body and image.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateComment>,
) -> AppResult<Json<DataResponse<Comment>>> {
    input.validate().map_err(AppError::from_validation)?;
    let comment = CommentRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }))?;
    Ok(Json(DataResponse { data: comment }))
}

// ---------------------------------------------------------------------------
// DELETE /api/comments/{id}
// ---------------------------------------------------------------------------

/// Delete one comment.
pub async fn delete(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = CommentRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Comment",
            id,
        }));
    }
    Ok(Json(MessageResponse::new("Comment deleted")))
}

// ---------------------------------------------------------------------------
// DELETE /api/comments/user/{user_id}
// ---------------------------------------------------------------------------

/// Remove every comment written by one user. Admin only.
pub async fn delete_all_for_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = CommentRepo::delete_all_for_user(&state.pool, user_id).await?;
    tracing::info!(user_id, deleted, "User comments deleted");
    Ok(Json(MessageResponse::with_deleted(
        "User comments deleted",
        deleted,
    )))
}
