//! Project entity model and DTOs.

use civitrack_core::geo::GeoPoint;
use civitrack_core::metrics::ProjectFigures;
use civitrack_core::project::{EfficiencyRating, ProjectCategory, ProjectStatus};
use civitrack_core::types::{DbId, Timestamp};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use validator::{Validate, ValidationError};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub project_name: String,
    pub description: Option<String>,
    pub location: Json<GeoPoint>,
    pub planning_start_date: NaiveDate,
    pub planning_complete_date: NaiveDate,
    pub construction_start_date: NaiveDate,
    pub original_completion_date: NaiveDate,
    pub current_completion_date: NaiveDate,
    pub status: ProjectStatus,
    pub original_budget: f64,
    pub current_budget: f64,
    pub category: ProjectCategory,
    pub result: Option<String>,
    pub area: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub municipal_funding: Option<bool>,
    pub provincial_funding: Option<bool>,
    pub federal_funding: Option<bool>,
    pub other_funding: Option<bool>,
    pub performance_metric: f64,
    pub efficiency: EfficiencyRating,
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Detail view: the row plus read-time derived metrics. Never persisted.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    /// Whole-month schedule delay.
    pub delay: i32,
    /// Absolute budget delta (positive = overrun).
    pub budget_change: f64,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProject {
    #[validate(length(min = 1, message = "project_name must not be empty"))]
    pub project_name: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_point"))]
    pub location: GeoPoint,
    pub planning_start_date: NaiveDate,
    pub planning_complete_date: NaiveDate,
    pub construction_start_date: NaiveDate,
    pub original_completion_date: NaiveDate,
    pub current_completion_date: NaiveDate,
    pub status: ProjectStatus,
    #[validate(range(min = 0.0, message = "original_budget must be non-negative"))]
    pub original_budget: f64,
    #[validate(range(min = 0.0, message = "current_budget must be non-negative"))]
    pub current_budget: f64,
    pub category: ProjectCategory,
    pub result: Option<String>,
    pub area: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub municipal_funding: Option<bool>,
    pub provincial_funding: Option<bool>,
    pub federal_funding: Option<bool>,
    pub other_funding: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0, message = "performance_metric must be in 0..=100"))]
    pub performance_metric: f64,
    #[serde(default)]
    pub efficiency: EfficiencyRating,
    pub website: Option<String>,
}

/// One record of a bulk import payload. Identical to [`CreateProject`] except
/// that `status` is the free-text value from the legacy export and must be
/// normalized before insertion.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ImportProject {
    #[validate(length(min = 1, message = "project_name must not be empty"))]
    pub project_name: String,
    pub description: Option<String>,
    #[validate(custom(function = "validate_point"))]
    pub location: GeoPoint,
    pub planning_start_date: NaiveDate,
    pub planning_complete_date: NaiveDate,
    pub construction_start_date: NaiveDate,
    pub original_completion_date: NaiveDate,
    pub current_completion_date: NaiveDate,
    pub status: String,
    #[validate(range(min = 0.0, message = "original_budget must be non-negative"))]
    pub original_budget: f64,
    #[validate(range(min = 0.0, message = "current_budget must be non-negative"))]
    pub current_budget: f64,
    pub category: ProjectCategory,
    pub result: Option<String>,
    pub area: Option<String>,
    pub region: Option<String>,
    pub address: Option<String>,
    pub postal_code: Option<String>,
    pub municipal_funding: Option<bool>,
    pub provincial_funding: Option<bool>,
    pub federal_funding: Option<bool>,
    pub other_funding: Option<bool>,
    #[validate(range(min = 0.0, max = 100.0, message = "performance_metric must be in 0..=100"))]
    pub performance_metric: f64,
    #[serde(default)]
    pub efficiency: EfficiencyRating,
    pub website: Option<String>,
}

impl ImportProject {
    /// Normalize the legacy status vocabulary into a [`CreateProject`].
    ///
    /// Fails when the status is neither a known legacy name nor a canonical
    /// lifecycle label.
    pub fn normalize(self) -> Result<CreateProject, String> {
        let status = ProjectStatus::from_legacy(&self.status)
            .ok_or_else(|| format!("unrecognized status '{}'", self.status))?;
        Ok(CreateProject {
            project_name: self.project_name,
            description: self.description,
            location: self.location,
            planning_start_date: self.planning_start_date,
            planning_complete_date: self.planning_complete_date,
            construction_start_date: self.construction_start_date,
            original_completion_date: self.original_completion_date,
            current_completion_date: self.current_completion_date,
            status,
            original_budget: self.original_budget,
            current_budget: self.current_budget,
            category: self.category,
            result: self.result,
            area: self.area,
            region: self.region,
            address: self.address,
            postal_code: self.postal_code,
            municipal_funding: self.municipal_funding,
            provincial_funding: self.provincial_funding,
            federal_funding: self.federal_funding,
            other_funding: self.other_funding,
            performance_metric: self.performance_metric,
            efficiency: self.efficiency,
            website: self.website,
        })
    }
}

/// Metric-relevant projection of a project row for the portfolio summary.
#[derive(Debug, Clone, FromRow)]
pub struct ProjectFiguresRow {
    pub performance_metric: f64,
    pub original_budget: f64,
    pub current_budget: f64,
    pub original_completion_date: NaiveDate,
    pub current_completion_date: NaiveDate,
    pub efficiency: EfficiencyRating,
}

impl From<ProjectFiguresRow> for ProjectFigures {
    fn from(row: ProjectFiguresRow) -> Self {
        ProjectFigures {
            performance_metric: row.performance_metric,
            original_budget: row.original_budget,
            current_budget: row.current_budget,
            original_completion_date: row.original_completion_date,
            current_completion_date: row.current_completion_date,
            efficiency: row.efficiency,
        }
    }
}

fn validate_point(point: &GeoPoint) -> Result<(), ValidationError> {
    point
        .validate()
        .map_err(|_| ValidationError::new("invalid_location"))
}
