//! Shared response envelope types for API handlers.
//!
//! All list/detail responses use a `{ "data": ... }` envelope per project
//! conventions. Use [`DataResponse`] instead of ad-hoc
//! `serde_json::json!({ "data": ... })` to get compile-time type safety and
//! consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Outcome of an administrative or destructive operation.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    /// Rows affected, where the operation has a meaningful count.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted: Option<u64>,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            deleted: None,
        }
    }

    pub fn with_deleted(message: impl Into<String>, deleted: u64) -> Self {
        Self {
            message: message.into(),
            deleted: Some(deleted),
        }
    }
}
