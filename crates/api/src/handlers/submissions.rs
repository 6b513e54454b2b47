//! Handler and templates for the combined list/detail view.

use askama::Template;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;

use formai_db::models::submission::SubmissionSummary;

use crate::state::AppState;
use crate::view::{self, SubmissionView};

/// Query parameters for `GET /`.
#[derive(Debug, Deserialize)]
pub struct IndexParams {
    pub submission_id: Option<String>,
}

#[derive(Template)]
#[template(path = "submissions_list.html")]
struct SubmissionsListTemplate {
    prod: bool,
    submissions: Vec<SubmissionSummary>,
}

#[derive(Template)]
#[template(path = "waiting.html")]
struct WaitingTemplate {
    prod: bool,
    submission_id: String,
}

#[derive(Template)]
#[template(path = "submission_details.html")]
struct SubmissionDetailsTemplate {
    prod: bool,
    results_client: String,
}

/// GET /
///
/// Without `submission_id`: the table of all submissions. With it: the
/// waiting page, the rendered results, or the fixed error page,
/// depending on the submission's observable state.
pub async fn index(
    State(state): State<AppState>,
    Query(params): Query<IndexParams>,
) -> Response {
    // One connection per request, returned to the pool on drop on every
    // exit path below.
    let mut conn = match state.pool.acquire().await {
        Ok(conn) => conn,
        Err(err) => {
            tracing::error!(error = %err, "Failed to connect to the database");
            return server_fault(view::CONNECTION_ERROR_BODY.to_string());
        }
    };

    // An empty submission_id (e.g. a blank form field) selects the list
    // view, same as an absent one.
    let submission_id = params.submission_id.as_deref().filter(|id| !id.is_empty());

    let prod = state.config.prod;

    match view::resolve(&mut conn, submission_id).await {
        SubmissionView::List(submissions) => render(SubmissionsListTemplate { prod, submissions }),
        SubmissionView::Waiting { submission_id } => render(WaitingTemplate {
            prod,
            submission_id,
        }),
        SubmissionView::Details { rendered_html } => render(SubmissionDetailsTemplate {
            prod,
            results_client: rendered_html,
        }),
        SubmissionView::Fault { message } => server_fault(message),
    }
}

/// Fixed user-facing failure page: HTTP 500 plus a plain body, no
/// internal detail.
fn server_fault(message: String) -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, Html(message)).into_response()
}

fn render<T: Template>(template: T) -> Response {
    match template.render() {
        Ok(html) => Html(html).into_response(),
        Err(err) => {
            tracing::error!(error = %err, "Template rendering failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Html("Error interno del servidor".to_string()),
            )
                .into_response()
        }
    }
}
