//! The view resolver: decides which presentation `GET /` produces.
//!
//! A submission's observable presentation walks a small state machine:
//! no-row-or-processing shows the waiting page, `success` shows the
//! rendered results, `error` shows the fixed failure page. "Row not
//! ingested yet" and "still processing" are deliberately
//! indistinguishable here; the client keeps polling either way.

use sqlx::PgConnection;

use formai_core::SubmissionStatus;
use formai_db::models::submission::SubmissionSummary;
use formai_db::repositories::SubmissionRepo;

use crate::render;

/// Body shown when a connection cannot be checked out at all.
pub const CONNECTION_ERROR_BODY: &str = "Error de conexión a la Base de Datos";

/// Body shown when the list query fails.
pub const LIST_ERROR_BODY: &str = "Error al obtener la lista de envíos.";

/// Body shown for a submission whose processing ended in `error`.
/// Fixed on purpose: the recorded cause is never exposed.
pub const PROCESSING_ERROR_BODY: &str = "Ha ocurrido un error durante el procesado.";

/// Body shown when fetching one submission's details fails.
pub fn detail_error_body(submission_id: &str) -> String {
    format!("Error al obtener los detalles para {submission_id}.")
}

/// Resolved presentation for `GET /`.
#[derive(Debug)]
pub enum SubmissionView {
    /// All submissions, identifier-descending.
    List(Vec<SubmissionSummary>),
    /// Not resolved yet: no row, or the row is still `processing`.
    Waiting { submission_id: String },
    /// Successful result, already rendered from Markdown to HTML.
    Details { rendered_html: String },
    /// Server fault: fixed body, HTTP 500.
    Fault { message: String },
}

/// Resolve the presentation for an optional submission id, using the
/// single connection checked out for this request.
pub async fn resolve(conn: &mut PgConnection, submission_id: Option<&str>) -> SubmissionView {
    match submission_id {
        None => list_view(conn).await,
        Some(id) => detail_view(conn, id).await,
    }
}

async fn list_view(conn: &mut PgConnection) -> SubmissionView {
    tracing::info!("No submission_id provided, fetching all submissions for table view");

    match SubmissionRepo::list_all(conn).await {
        Ok(submissions) => SubmissionView::List(submissions),
        Err(err) => {
            tracing::error!(error = %err, "Error fetching submission list");
            SubmissionView::Fault {
                message: LIST_ERROR_BODY.to_string(),
            }
        }
    }
}

async fn detail_view(conn: &mut PgConnection, id: &str) -> SubmissionView {
    tracing::info!(submission_id = id, "Fetching details for submission");

    let row = match SubmissionRepo::find_result(conn, id).await {
        Ok(row) => row,
        Err(err) => {
            tracing::error!(submission_id = id, error = %err, "Error fetching submission details");
            return SubmissionView::Fault {
                message: detail_error_body(id),
            };
        }
    };

    // Not ingested yet and still processing look the same to this
    // system; both get the waiting page.
    let Some(row) = row else {
        tracing::warn!(submission_id = id, "Submission not found in the store");
        return SubmissionView::Waiting {
            submission_id: id.to_string(),
        };
    };

    match row.status.parse::<SubmissionStatus>() {
        Ok(SubmissionStatus::Processing) => SubmissionView::Waiting {
            submission_id: id.to_string(),
        },
        Ok(SubmissionStatus::Error) => SubmissionView::Fault {
            message: PROCESSING_ERROR_BODY.to_string(),
        },
        Ok(SubmissionStatus::Success) => match row.result_consulting {
            Some(markdown) => {
                tracing::info!(submission_id = id, "Retrieved results for submission");
                SubmissionView::Details {
                    rendered_html: render::markdown_to_html(&markdown),
                }
            }
            None => {
                // The store promises a payload on success; a NULL here is
                // a store fault, not a waiting state.
                tracing::error!(submission_id = id, "Success row carries no result payload");
                SubmissionView::Fault {
                    message: detail_error_body(id),
                }
            }
        },
        Err(err) => {
            tracing::error!(submission_id = id, error = %err, "Unreadable status value in store");
            SubmissionView::Fault {
                message: detail_error_body(id),
            }
        }
    }
}
