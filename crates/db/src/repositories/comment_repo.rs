//! Repository for the `comments` table.

use civitrack_core::types::DbId;
use sqlx::PgPool;

use crate::models::comment::{Comment, CreateComment, UpdateComment};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, body, image, report_id, user_id, created_at, updated_at";

/// Same list qualified for the join against `reports`.
const QUALIFIED_COLUMNS: &str =
    "c.id, c.body, c.image, c.report_id, c.user_id, c.created_at, c.updated_at";

/// Provides CRUD operations for comments. Comments have no approval gate;
/// every read is the public view.
pub struct CommentRepo;

impl CommentRepo {
    /// Insert a new comment, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateComment) -> Result<Comment, sqlx::Error> {
        let query = format!(
            "INSERT INTO comments (body, image, report_id, user_id)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(&input.body)
            .bind(&input.image)
            .bind(input.report_id)
            .bind(input.user_id)
            .fetch_one(pool)
            .await
    }

    /// List all comments, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM comments ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Comment>(&query).fetch_all(pool).await
    }

    /// Comments under a single report, oldest first (thread order).
    pub async fn list_for_report(
        pool: &PgPool,
        report_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM comments WHERE report_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(report_id)
            .fetch_all(pool)
            .await
    }

    /// Comments under any report of a project, joined through `reports`.
    pub async fn list_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Comment>, sqlx::Error> {
        let query = format!(
            "SELECT {QUALIFIED_COLUMNS} FROM comments c
             JOIN reports r ON r.id = c.report_id
             WHERE r.project_id = $1
             ORDER BY c.created_at, c.id"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Full-record replace. Returns `None` if the id is absent.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComment,
    ) -> Result<Option<Comment>, sqlx::Error> {
        let query = format!(
            "UPDATE comments SET body = $2, image = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Comment>(&query)
            .bind(id)
            .bind(&input.body)
            .bind(&input.image)
            .fetch_optional(pool)
            .await
    }

    /// Hard delete one comment. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Cascade helper for the user-deletion flow. Returns rows removed.
    pub async fn delete_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("DELETE FROM comments WHERE user_id = $1")
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }
}
