//! Handlers for the `/api/reports` resource, including the approval workflow.
//!
//! A report enters the system unapproved and invisible to the public listing.
//! Only the admin approve endpoint flips the flag; updates leave it alone.

use axum::extract::{Path, State};
use axum::Json;
use validator::Validate;

use civitrack_core::error::CoreError;
use civitrack_core::types::DbId;
use civitrack_db::models::report::{CreateReport, Report, UpdateReport};
use civitrack_db::repositories::{ProjectRepo, ReportRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAdmin, RequireAuth};
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// GET /api/reports/project/{project_id}
// ---------------------------------------------------------------------------

/// Approved reports for a project. This is the public view.
pub async fn list_for_project(
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let reports = ReportRepo::list_for_project_public(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: reports }))
}

// ---------------------------------------------------------------------------
// GET /api/reports/project/admin/{project_id}
// ---------------------------------------------------------------------------

/// All reports for a project, approved or pending. Admin only.
pub async fn list_for_project_admin(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<Report>>>> {
    let reports = ReportRepo::list_for_project_admin(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: reports }))
}

// ---------------------------------------------------------------------------
// POST /api/reports/project/admin/approve/{report_id}
// ---------------------------------------------------------------------------

/// Approve a report, making it publicly visible. Idempotent. Admin only.
pub async fn approve(
    RequireAdmin(admin): RequireAdmin,
    State(state): State<AppState>,
    Path(report_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Report>>> {
    let report = ReportRepo::approve(&state.pool, report_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id: report_id,
        }))?;
    tracing::info!(
        report_id,
        approved_by = admin.user_id,
        "Report approved"
    );
    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// POST /api/reports
// ---------------------------------------------------------------------------

/// File a new report. The report starts unapproved regardless of the payload.
///
/// The referenced project and author must exist at creation time; the columns
/// themselves carry no foreign keys, so this check is the only referential
/// guard.
pub async fn create(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateReport>,
) -> AppResult<Json<DataResponse<Report>>> {
    input.validate().map_err(AppError::from_validation)?;

    ProjectRepo::find_by_id(&state.pool, input.project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: input.project_id,
        }))?;
    UserRepo::find_by_id(&state.pool, input.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: input.user_id,
        }))?;

    let report = ReportRepo::create(&state.pool, &input).await?;
    tracing::info!(id = report.id, project_id = report.project_id, "Report filed");
    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// PUT /api/reports/{id}
// ---------------------------------------------------------------------------

/// Full-record replace. The approval flag is untouched.
pub async fn update(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateReport>,
) -> AppResult<Json<DataResponse<Report>>> {
    input.validate().map_err(AppError::from_validation)?;
    let report = ReportRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }))?;
    Ok(Json(DataResponse { data: report }))
}

// ---------------------------------------------------------------------------
// DELETE /api/reports/{id}
// ---------------------------------------------------------------------------

/// Delete one report.
pub async fn delete(
    RequireAuth(_user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let removed = ReportRepo::delete(&state.pool, id).await?;
    if !removed {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Report",
            id,
        }));
    }
    Ok(Json(MessageResponse::new("Report deleted")))
}

// ---------------------------------------------------------------------------
// DELETE /api/reports
// ---------------------------------------------------------------------------

/// Remove every report. Admin only.
pub async fn delete_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ReportRepo::delete_all(&state.pool).await?;
    tracing::warn!(deleted, "All reports deleted");
    Ok(Json(MessageResponse::with_deleted(
        "All reports deleted",
        deleted,
    )))
}

// ---------------------------------------------------------------------------
// DELETE /api/reports/user/{user_id}
// ---------------------------------------------------------------------------

/// Remove every report filed by one user. Admin only.
pub async fn delete_all_for_user(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(user_id): Path<DbId>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ReportRepo::delete_all_for_user(&state.pool, user_id).await?;
    tracing::info!(user_id, deleted, "User reports deleted");
    Ok(Json(MessageResponse::with_deleted(
        "User reports deleted",
        deleted,
    )))
}
