//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Repositories hold no state
//! between requests; the pool is the only shared resource.

pub mod comment_repo;
pub mod project_repo;
pub mod report_repo;
pub mod user_repo;

pub use comment_repo::CommentRepo;
pub use project_repo::ProjectRepo;
pub use report_repo::ReportRepo;
pub use user_repo::UserRepo;
