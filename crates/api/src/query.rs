//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Default page size for project listing; matches what the dashboard grid
/// renders per page.
pub const DEFAULT_PAGE_SIZE: i64 = 6;

/// Largest page size a caller may request.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Query parameters for `GET /api/projects`
/// (`?status=&category=&page=&limit=`).
#[derive(Debug, Default, Deserialize)]
pub struct ProjectListParams {
    pub status: Option<String>,
    pub category: Option<String>,
    pub page: Option<i64>,
    pub limit: Option<i64>,
}

impl ProjectListParams {
    /// 1-based page, clamped to at least 1.
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(1).max(1)
    }

    /// Page size, clamped to `1..=MAX_PAGE_SIZE`.
    pub fn limit(&self) -> i64 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }
}
