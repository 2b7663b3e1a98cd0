//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async methods
//! that accept `&PgPool` as the first argument.

pub mod enrollment_repo;

pub use enrollment_repo::EnrollmentRepo;
