//! Row shapes read from `formai_db`.
//!
//! The table is externally owned; these structs mirror only the columns
//! each query actually selects. The `status` column is carried as the
//! raw stored string — parsing it into [`SubmissionStatus`] is the view
//! layer's concern, and the status endpoint echoes it verbatim.
//!
//! [`SubmissionStatus`]: formai_core::SubmissionStatus

use serde::Serialize;
use sqlx::FromRow;

/// One `(submission_id, status)` pair for the list view.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubmissionSummary {
    pub submission_id: String,
    pub status: String,
}

/// The `(result_consulting, status)` pair for the detail view.
///
/// `result_consulting` is nullable at the SQL level and only meaningful
/// when `status == "success"`.
#[derive(Debug, Clone, FromRow)]
pub struct SubmissionResult {
    pub result_consulting: Option<String>,
    pub status: String,
}
