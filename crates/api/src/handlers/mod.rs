//! HTTP request handlers, one module per resource.

pub mod comment;
pub mod health;
pub mod project;
pub mod report;
pub mod user;
