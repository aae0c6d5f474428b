//! Repository for the `reports` table, including the approval gate.
//!
//! Visibility is controlled by which listing method the handler calls:
//! [`ReportRepo::list_for_project_public`] only ever returns approved rows,
//! while [`ReportRepo::list_for_project_admin`] returns everything.

use civitrack_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::report::{CreateReport, Report, UpdateReport};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, body, location, image, project_id, user_id, approved, created_at, updated_at";

/// Provides CRUD and approval operations for field reports.
pub struct ReportRepo;

impl ReportRepo {
    /// Insert a new report. `approved` always starts false; the column
    /// default is the only writer at creation time.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> Result<Report, sqlx::Error> {
        let query = format!(
            "INSERT INTO reports (title, body, location, image, project_id, user_id)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(Json(&input.location))
            .bind(&input.image)
            .bind(input.project_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// Find a report by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Approved reports for a project -- the public view.
    pub async fn list_for_project_public(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE project_id = $1 AND approved = TRUE
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// All reports for a project regardless of approval -- the privileged view.
    pub async fn list_for_project_admin(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Report>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM reports
             WHERE project_id = $1
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Mark a report approved. Idempotent: approving an already-approved
    /// report rewrites the same value. Returns `None` if the id does not
    /// resolve.
    pub async fn approve(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET approved = TRUE, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Full-record replace. The approval flag is not touched; it only moves
    /// through [`ReportRepo::approve`]. Returns `None` if the id is absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateReport,
    ) -> Result<Option<Report>, sqlx::Error> {
        let query = format!(
            "UPDATE reports SET
                title = $2,
                body = $3,
                location = $4,
                image = $5,
                project_id = $6,
                user_id = $7,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(Json(&input.location))
            .bind(&input.image)
            .bind(input.project_id)
            .bind(input.user_id)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete one report. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Administrative wipe. Returns the number of rows removed.
    pub async fn delete_all(pool: &PgPool) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports").execute(pool).await?;
        Ok(result.rows_affected())
    }

    /// Cascade helper for the user-deletion flow. Returns rows removed.
    pub async fn delete_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
