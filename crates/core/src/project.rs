//! Project categorical fields.
//!
//! All three enums are stored as TEXT (constrained by CHECK in the schema)
//! and serialized with the exact labels the dashboard and mobile clients
//! already depend on, spaces included.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Ordered project lifecycle. Regression is not expected but also not
/// enforced; the value is whatever the source data says.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum ProjectStatus {
    #[serde(rename = "Planning Started")]
    #[sqlx(rename = "Planning Started")]
    PlanningStarted,
    #[serde(rename = "Planning Complete")]
    #[sqlx(rename = "Planning Complete")]
    PlanningComplete,
    #[serde(rename = "Construction Started")]
    #[sqlx(rename = "Construction Started")]
    ConstructionStarted,
    #[serde(rename = "Completed")]
    #[sqlx(rename = "Completed")]
    Completed,
}

impl ProjectStatus {
    /// Canonical wire label.
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectStatus::PlanningStarted => "Planning Started",
            ProjectStatus::PlanningComplete => "Planning Complete",
            ProjectStatus::ConstructionStarted => "Construction Started",
            ProjectStatus::Completed => "Completed",
        }
    }

    /// Normalize a free-text legacy status from bulk-import source data.
    ///
    /// The municipal open-data exports use a different vocabulary than the
    /// canonical lifecycle. Legacy names map onto canonical ones; canonical
    /// names pass through unchanged; anything else is rejected so a bad row
    /// fails validation instead of poisoning the table.
    pub fn from_legacy(value: &str) -> Option<Self> {
        match value {
            "Planning" => Some(ProjectStatus::PlanningStarted),
            "Under construction" => Some(ProjectStatus::ConstructionStarted),
            "Complete" => Some(ProjectStatus::Completed),
            other => other.parse().ok(),
        }
    }
}

impl fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Planning Started" => Ok(ProjectStatus::PlanningStarted),
            "Planning Complete" => Ok(ProjectStatus::PlanningComplete),
            "Construction Started" => Ok(ProjectStatus::ConstructionStarted),
            "Completed" => Ok(ProjectStatus::Completed),
            other => Err(format!("unknown project status: {other}")),
        }
    }
}

/// Infrastructure sector the project belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "TEXT")]
pub enum ProjectCategory {
    Transit,
    Communities,
    #[serde(rename = "Roads and bridges")]
    #[sqlx(rename = "Roads and bridges")]
    RoadsAndBridges,
    Recreation,
    #[serde(rename = "Health care")]
    #[sqlx(rename = "Health care")]
    HealthCare,
    Education,
}

impl ProjectCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            ProjectCategory::Transit => "Transit",
            ProjectCategory::Communities => "Communities",
            ProjectCategory::RoadsAndBridges => "Roads and bridges",
            ProjectCategory::Recreation => "Recreation",
            ProjectCategory::HealthCare => "Health care",
            ProjectCategory::Education => "Education",
        }
    }
}

impl fmt::Display for ProjectCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Performance trend label. Defaults to `Moderate` when source data has no
/// opinion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    sqlx::Type,
)]
#[sqlx(type_name = "TEXT")]
pub enum EfficiencyRating {
    Improving,
    #[default]
    Moderate,
    Declining,
}

impl EfficiencyRating {
    pub fn as_str(self) -> &'static str {
        match self {
            EfficiencyRating::Improving => "Improving",
            EfficiencyRating::Moderate => "Moderate",
            EfficiencyRating::Declining => "Declining",
        }
    }
}

impl fmt::Display for EfficiencyRating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_status_names_normalize() {
        assert_eq!(
            ProjectStatus::from_legacy("Planning"),
            Some(ProjectStatus::PlanningStarted)
        );
        assert_eq!(
            ProjectStatus::from_legacy("Under construction"),
            Some(ProjectStatus::ConstructionStarted)
        );
        assert_eq!(
            ProjectStatus::from_legacy("Complete"),
            Some(ProjectStatus::Completed)
        );
    }

    #[test]
    fn canonical_status_names_pass_through() {
        assert_eq!(
            ProjectStatus::from_legacy("Planning Complete"),
            Some(ProjectStatus::PlanningComplete)
        );
        assert_eq!(
            ProjectStatus::from_legacy("Completed"),
            Some(ProjectStatus::Completed)
        );
    }

    #[test]
    fn unknown_status_is_rejected() {
        assert_eq!(ProjectStatus::from_legacy("Cancelled"), None);
        assert_eq!(ProjectStatus::from_legacy(""), None);
    }

    #[test]
    fn labels_round_trip_through_serde() {
        let json = serde_json::to_string(&ProjectCategory::RoadsAndBridges).unwrap();
        assert_eq!(json, "\"Roads and bridges\"");
        let back: ProjectCategory = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ProjectCategory::RoadsAndBridges);

        let json = serde_json::to_string(&ProjectStatus::PlanningStarted).unwrap();
        assert_eq!(json, "\"Planning Started\"");
    }

    #[test]
    fn efficiency_defaults_to_moderate() {
        assert_eq!(EfficiencyRating::default(), EfficiencyRating::Moderate);
    }
}
