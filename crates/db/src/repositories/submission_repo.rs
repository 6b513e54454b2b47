//! Read-only queries over the `formai_db` submissions table.
//!
//! Every method takes the single connection checked out for the current
//! request. This system never writes the table; the ingestion worker is
//! the sole writer.

use sqlx::PgConnection;

use crate::models::submission::{SubmissionResult, SubmissionSummary};

/// Read access to submissions.
pub struct SubmissionRepo;

impl SubmissionRepo {
    /// All submissions as `(submission_id, status)` pairs, newest-looking
    /// first.
    ///
    /// The table has no timestamp column, so identifier-descending is the
    /// only ordering available. Known limitation, not to be papered over.
    pub async fn list_all(
        conn: &mut PgConnection,
    ) -> Result<Vec<SubmissionSummary>, sqlx::Error> {
        sqlx::query_as::<_, SubmissionSummary>(
            "SELECT submission_id, status FROM formai_db ORDER BY submission_id DESC",
        )
        .fetch_all(&mut *conn)
        .await
    }

    /// The result payload and status for one submission, if its row has
    /// been ingested yet.
    pub async fn find_result(
        conn: &mut PgConnection,
        submission_id: &str,
    ) -> Result<Option<SubmissionResult>, sqlx::Error> {
        sqlx::query_as::<_, SubmissionResult>(
            "SELECT result_consulting, status FROM formai_db WHERE submission_id = $1",
        )
        .bind(submission_id)
        .fetch_optional(&mut *conn)
        .await
    }

    /// The raw stored status string for one submission, if present.
    pub async fn fetch_status(
        conn: &mut PgConnection,
        submission_id: &str,
    ) -> Result<Option<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>(
            "SELECT status FROM formai_db WHERE submission_id = $1",
        )
        .bind(submission_id)
        .fetch_optional(&mut *conn)
        .await
    }
}
