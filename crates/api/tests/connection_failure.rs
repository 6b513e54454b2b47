//! Behaviour when the submission store is unreachable.
//!
//! These tests build the app against a lazy pool pointing at a closed
//! port, so every connection checkout fails the way it would with the
//! database down. No live database is needed.

mod common;

use std::sync::Arc;
use std::time::Duration;

use axum::http::StatusCode;
use common::{body_json, body_text, get, test_config};
use sqlx::postgres::PgPoolOptions;

use formai_api::router::build_app_router;
use formai_api::state::AppState;
use formai_db::DbConfig;

/// A pool whose every acquire fails: nothing listens on the discard port.
///
/// The short acquire timeout keeps these tests fast; the production pool
/// uses the sqlx default.
fn unreachable_pool() -> formai_db::DbPool {
    let config = DbConfig {
        host: "127.0.0.1".into(),
        dbname: "formai".into(),
        user: "nobody".into(),
        password: "irrelevant".into(),
        port: 9,
    };
    PgPoolOptions::new()
        .acquire_timeout(Duration::from_secs(2))
        .max_connections(1)
        .connect_lazy_with(config.connect_options())
}

fn app_with_unreachable_store() -> axum::Router {
    build_app_router(AppState {
        pool: unreachable_pool(),
        config: Arc::new(test_config()),
    })
}

#[tokio::test]
async fn main_view_reports_connection_failure_in_spanish() {
    let response = get(app_with_unreachable_store(), "/").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error de conexión a la Base de Datos");
}

#[tokio::test]
async fn detail_view_reports_connection_failure_in_spanish() {
    // Acquisition fails before the id is ever looked at.
    let response = get(app_with_unreachable_store(), "/?submission_id=abc123").await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body_text(response).await, "Error de conexión a la Base de Datos");
}

#[tokio::test]
async fn status_endpoint_reports_connection_failure_as_json() {
    let response = get(
        app_with_unreachable_store(),
        "/check-status?submission_id=abc123",
    )
    .await;

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = body_json(response).await;
    assert_eq!(json["status"], "error");
    assert_eq!(json["message"], "Database connection error");
}

#[tokio::test]
async fn health_endpoint_degrades_instead_of_failing() {
    let response = get(app_with_unreachable_store(), "/health").await;

    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["db_healthy"], false);
}
