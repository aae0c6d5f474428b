//! Report entity model and DTOs.

use civitrack_core::geo::GeoPoint;
use civitrack_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A field report row from the `reports` table.
///
/// `project_id` / `user_id` serialize as `project` / `user`, the reference
/// field names the mobile app already uses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Report {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub location: Json<GeoPoint>,
    pub image: Option<String>,
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
    pub approved: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a report.
///
/// There is deliberately no `approved` field: a new report is always pending
/// no matter what the caller sends.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateReport {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    #[validate(custom(function = "validate_point"))]
    pub location: GeoPoint,
    pub image: Option<String>,
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
}

/// DTO for a full-record report update. The approval flag is not part of the
/// record from the caller's perspective; it only changes through the approve
/// operation.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateReport {
    #[validate(length(min = 1, message = "title must not be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "body must not be empty"))]
    pub body: String,
    #[validate(custom(function = "validate_point"))]
    pub location: GeoPoint,
    pub image: Option<String>,
    #[serde(rename = "project")]
    pub project_id: DbId,
    #[serde(rename = "user")]
    pub user_id: DbId,
}

fn validate_point(point: &GeoPoint) -> Result<(), ValidationError> {
    point
        .validate()
        .map_err(|_| ValidationError::new("invalid_location"))
}
