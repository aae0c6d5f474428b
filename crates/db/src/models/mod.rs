//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` + `Validate` create DTO for inserts
//! - Response projections where the row itself is not safe or not complete
//!   (user without the password hash, project enriched with derived metrics)

pub mod comment;
pub mod project;
pub mod report;
pub mod user;
