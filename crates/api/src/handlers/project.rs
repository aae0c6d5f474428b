//! Handlers for the `/api/projects` resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use serde::Serialize;
use validator::Validate;

use civitrack_core::error::CoreError;
use civitrack_core::metrics::{self, PortfolioSummary, ProjectFigures};
use civitrack_core::types::DbId;
use civitrack_db::models::project::{CreateProject, ImportProject, Project, ProjectDetail};
use civitrack_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAdmin;
use crate::query::ProjectListParams;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// Outcome of a bulk import: records already present are skipped, not errors.
#[derive(Debug, Serialize)]
pub struct ImportOutcome {
    pub message: String,
    pub inserted: u64,
}

// ---------------------------------------------------------------------------
// GET /api/projects
// ---------------------------------------------------------------------------

/// List projects with optional status/category filters and pagination.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ProjectListParams>,
) -> AppResult<Json<DataResponse<Vec<Project>>>> {
    let projects = ProjectRepo::list(
        &state.pool,
        params.status.as_deref(),
        params.category.as_deref(),
        params.page(),
        params.limit(),
    )
    .await?;
    tracing::debug!(count = projects.len(), "Listed projects");
    Ok(Json(DataResponse { data: projects }))
}

// ---------------------------------------------------------------------------
// GET /api/projects/{id}
// ---------------------------------------------------------------------------

/// Fetch one project enriched with its derived schedule and budget metrics.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<ProjectDetail>>> {
    let project = ProjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id,
        }))?;

    let delay = metrics::schedule_delay_months(
        project.original_completion_date,
        project.current_completion_date,
    );
    let budget_change = metrics::budget_change(project.original_budget, project.current_budget);

    Ok(Json(DataResponse {
        data: ProjectDetail {
            project,
            delay,
            budget_change,
        },
    }))
}

// ---------------------------------------------------------------------------
// POST /api/projects
// ---------------------------------------------------------------------------

/// Create a new project. Admin only.
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<Json<DataResponse<Project>>> {
    input.validate().map_err(AppError::from_validation)?;
    let project = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(id = project.id, name = %project.project_name, "Project created");
    Ok(Json(DataResponse { data: project }))
}

// ---------------------------------------------------------------------------
// POST /api/projects/insertMany
// ---------------------------------------------------------------------------

/// Bulk-import projects from a legacy export. Records whose `project_name`
/// already exists are skipped; the whole batch fails on the first record
/// that cannot be normalized or validated.
pub async fn insert_many(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Json(records): Json<Vec<ImportProject>>,
) -> AppResult<Json<ImportOutcome>> {
    let total = records.len();
    let mut inserted = 0u64;
    for record in records {
        let create = record
            .normalize()
            .map_err(|msg| AppError::Core(CoreError::Validation(msg)))?;
        create.validate().map_err(AppError::from_validation)?;
        if ProjectRepo::insert_if_absent(&state.pool, &create).await? {
            inserted += 1;
        }
    }
    tracing::info!(total, inserted, "Bulk project import finished");
    Ok(Json(ImportOutcome {
        message: format!("Imported {inserted} of {total} projects"),
        inserted,
    }))
}

// ---------------------------------------------------------------------------
// GET /api/projects/summary
// ---------------------------------------------------------------------------

/// Portfolio-wide aggregate metrics. `data` is `null` when no projects exist.
pub async fn summary(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Option<PortfolioSummary>>>> {
    let figures: Vec<ProjectFigures> = ProjectRepo::figures(&state.pool)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(DataResponse {
        data: metrics::portfolio_summary(&figures),
    }))
}

// ---------------------------------------------------------------------------
// DELETE /api/projects/deleteAll
// ---------------------------------------------------------------------------

/// Remove every project. Admin only.
pub async fn delete_all(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    let deleted = ProjectRepo::delete_all(&state.pool).await?;
    tracing::warn!(deleted, "All projects deleted");
    Ok(Json(MessageResponse::with_deleted(
        "All projects deleted",
        deleted,
    )))
}
