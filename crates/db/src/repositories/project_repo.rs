//! Repository for the `projects` table.

use civitrack_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::project::{CreateProject, Project, ProjectFiguresRow};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, project_name, description, location, \
    planning_start_date, planning_complete_date, construction_start_date, \
    original_completion_date, current_completion_date, status, \
    original_budget, current_budget, category, result, area, region, \
    address, postal_code, municipal_funding, provincial_funding, \
    federal_funding, other_funding, performance_metric, efficiency, website, \
    created_at, updated_at";

/// Insert column list (id and timestamps are store-generated).
const INSERT_COLUMNS: &str = "project_name, description, location, \
    planning_start_date, planning_complete_date, construction_start_date, \
    original_completion_date, current_completion_date, status, \
    original_budget, current_budget, category, result, area, region, \
    address, postal_code, municipal_funding, provincial_funding, \
    federal_funding, other_funding, performance_metric, efficiency, website";

const INSERT_PLACEHOLDERS: &str = "$1, $2, $3, $4, $5, $6, $7, $8, $9, $10, \
    $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21, $22, $23, $24";

/// Provides CRUD and bulk-import operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// List projects with optional case-insensitive status/category filters
    /// and offset pagination.
    ///
    /// `page` is 1-based; the offset is `(page - 1) * limit`. No total count
    /// is computed -- callers detect the last page by receiving fewer than
    /// `limit` rows.
    pub async fn list(
        pool: &PgPool,
        status: Option<&str>,
        category: Option<&str>,
        page: i64,
        limit: i64,
    ) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects
             WHERE ($1::TEXT IS NULL OR LOWER(status) = LOWER($1))
               AND ($2::TEXT IS NULL OR LOWER(category) = LOWER($2))
             ORDER BY id
             LIMIT $3 OFFSET $4"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(status)
            .bind(category)
            .bind(limit)
            .bind((page - 1) * limit)
            .fetch_all(pool)
            .await
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new project, returning the created row.
    ///
    /// A duplicate `project_name` violates `uq_projects_project_name` and
    /// surfaces as a database error the API layer maps to 409.
    pub async fn create(pool: &PgPool, input: &CreateProject) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects ({INSERT_COLUMNS})
             VALUES ({INSERT_PLACEHOLDERS})
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.project_name)
            .bind(&input.description)
            .bind(Json(&input.location))
            .bind(input.planning_start_date)
            .bind(input.planning_complete_date)
            .bind(input.construction_start_date)
            .bind(input.original_completion_date)
            .bind(input.current_completion_date)
            .bind(input.status)
            .bind(input.original_budget)
            .bind(input.current_budget)
            .bind(input.category)
            .bind(&input.result)
            .bind(&input.area)
            .bind(&input.region)
            .bind(&input.address)
            .bind(&input.postal_code)
            .bind(input.municipal_funding)
            .bind(input.provincial_funding)
            .bind(input.federal_funding)
            .bind(input.other_funding)
            .bind(input.performance_metric)
            .bind(input.efficiency)
            .bind(&input.website)
            .fetch_one(pool)
            .await
    }

    /// Insert one record of a bulk import, skipping it when a project with
    /// the same name already exists.
    ///
    /// The existence check and the insert are a single atomic statement
    /// (`ON CONFLICT ... DO NOTHING`), so concurrent imports of the same
    /// name cannot both succeed. Returns `true` if a row was inserted.
    pub async fn insert_if_absent(
        pool: &PgPool,
        input: &CreateProject,
    ) -> Result<bool, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects ({INSERT_COLUMNS})
             VALUES ({INSERT_PLACEHOLDERS})
             ON CONFLICT (project_name) DO NOTHING"
        );
        let result = sqlx::query(&query)
            .bind(&input.project_name)
            .bind(&input.description)
            .bind(Json(&input.location))
            .bind(input.planning_start_date)
            .bind(input.planning_complete_date)
            .bind(input.construction_start_date)
            .bind(input.original_completion_date)
            .bind(input.current_completion_date)
            .bind(input.status)
            .bind(input.original_budget)
            .bind(input.current_budget)
            .bind(input.category)
            .bind(&input.result)
            .bind(&input.area)
            .bind(&input.region)
            .bind(&input.address)
            .bind(&input.postal_code)
            .bind(input.municipal_funding)
            .bind(input.provincial_funding)
            .bind(input.federal_funding)
            .bind(input.other_funding)
            .bind(input.performance_metric)
            .bind(input.efficiency)
            .bind(&input.website)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Administrative wipe. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Fetch the metric-relevant fields of every project for the portfolio
    /// summary.
    pub async fn figures(pool: &PgPool) -> Result<Vec<ProjectFiguresRow>, sqlx::Error> {
        sqlx::query_as::<_, ProjectFiguresRow>(
            "SELECT performance_metric, original_budget, current_budget,
                    original_completion_date, current_completion_date, efficiency
             FROM projects",
        )
        .fetch_all(pool)
        .await
    }
}
