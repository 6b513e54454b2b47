pub mod health;

use axum::routing::get;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the application route tree.
///
/// ```text
/// /                 combined list/detail HTML view (optional submission_id)
/// /check-status     JSON status poller (required submission_id)
/// ```
pub fn app_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::submissions::index))
        .route("/check-status", get(handlers::status::check_status))
}
