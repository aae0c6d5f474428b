//! Shared fixtures for repository tests.

// Not every test binary uses every fixture.
#![allow(dead_code)]

use civitrack_core::geo::GeoPoint;
use civitrack_core::project::{EfficiencyRating, ProjectCategory, ProjectStatus};
use chrono::NaiveDate;
use civitrack_db::models::project::CreateProject;
use civitrack_db::models::report::CreateReport;
use civitrack_db::models::user::CreateUser;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// A valid project create DTO with the given name; everything else fixed.
pub fn project(name: &str) -> CreateProject {
    CreateProject {
        project_name: name.to_string(),
        description: Some("test project".to_string()),
        location: GeoPoint::new(-79.3832, 43.6532),
        planning_start_date: date(2021, 1, 1),
        planning_complete_date: date(2021, 6, 1),
        construction_start_date: date(2021, 9, 1),
        original_completion_date: date(2024, 1, 15),
        current_completion_date: date(2024, 4, 1),
        status: ProjectStatus::ConstructionStarted,
        original_budget: 100_000.0,
        current_budget: 120_000.0,
        category: ProjectCategory::Transit,
        result: None,
        area: None,
        region: Some("Downtown".to_string()),
        address: None,
        postal_code: None,
        municipal_funding: Some(true),
        provincial_funding: Some(false),
        federal_funding: None,
        other_funding: None,
        performance_metric: 70.0,
        efficiency: EfficiencyRating::Moderate,
        website: None,
    }
}

pub fn report(project_id: i64, user_id: i64, title: &str) -> CreateReport {
    CreateReport {
        title: title.to_string(),
        body: "observed on site".to_string(),
        location: GeoPoint::new(-79.40000000000001, 43.65),
        image: None,
        project_id,
        user_id,
    }
}

pub fn user(username: &str, email: &str) -> CreateUser {
    CreateUser {
        username: username.to_string(),
        first_name: "Test".to_string(),
        last_name: "User".to_string(),
        email: email.to_string(),
        phone: None,
        password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c29tZXNhbHQ$aGFzaGhhc2hoYXNoaGFzaA"
            .to_string(),
        role: "user".to_string(),
    }
}
