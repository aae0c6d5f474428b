//! Comment entity model and DTOs.

use civitrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A comment row from the `comments` table. Visible as soon as it exists;
/// comments have no approval gate.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Comment {
    pub id: DbId,
    pub body: String,
    pub image: Option<String>,
    #[serde(rename = "report")]
    pub report_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a comment.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateComment {
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    pub image: Option<String>,
    #[serde(rename = "report")]
    pub report_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
}

/// DTO for a full-record comment update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateComment {
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    pub image: Option<String>,
}
