//! Repository layer.
//!
//! Repositories are zero-sized structs providing async read methods
//! that accept the request's checked-out `&mut PgConnection`.

pub mod submission_repo;

pub use submission_repo::SubmissionRepo;
