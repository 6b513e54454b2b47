//! Domain vocabulary shared by the FormAI front-end crates.
//!
//! No I/O lives here: only the submission status enum and the error
//! taxonomy used across the database and API layers.

pub mod error;
pub mod status;

pub use error::CoreError;
pub use status::SubmissionStatus;
