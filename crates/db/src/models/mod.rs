//! Row models for the `formai_db` table.

pub mod submission;
