//! Pure domain logic for CiviTrack: entity enums, the GeoJSON point type,
//! the derived-metrics engine, and shared error/ID types.
//!
//! Nothing in this crate performs I/O; everything is testable without a
//! database or a running server.

pub mod error;
pub mod geo;
pub mod metrics;
pub mod project;
pub mod roles;
pub mod types;
