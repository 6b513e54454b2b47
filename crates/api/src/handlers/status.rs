//! The status-polling endpoint.

use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use formai_core::CoreError;
use formai_db::repositories::SubmissionRepo;

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /check-status`. `submission_id` is
/// required; a request without it is rejected by the extractor.
#[derive(Debug, Deserialize)]
pub struct StatusParams {
    pub submission_id: String,
}

/// `{"status": …}` — the stored enum value, echoed verbatim.
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// GET /check-status
///
/// Intentionally minimal: a polling client gets the status enum and
/// nothing else, and fetches the detail view itself once the status is
/// no longer `processing`.
pub async fn check_status(
    State(state): State<AppState>,
    Query(params): Query<StatusParams>,
) -> AppResult<Json<StatusResponse>> {
    let mut conn = state.pool.acquire().await?;

    let status = SubmissionRepo::fetch_status(&mut conn, &params.submission_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(params.submission_id.clone()))?;

    Ok(Json(StatusResponse { status }))
}
