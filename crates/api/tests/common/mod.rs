//! Shared helpers for API integration tests.
#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use formai_api::config::ServerConfig;
use formai_api::router::build_app_router;
use formai_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults (non-production).
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        prod: false,
    }
}

/// Build the full application router, using the given database pool.
///
/// Uses [`build_app_router`] directly so tests exercise the same
/// middleware stack (request ID, tracing, panic recovery) that
/// production uses.
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

/// Issue a GET request against the app and return the raw response.
pub async fn get(app: Router, uri: &str) -> Response {
    app.oneshot(
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .expect("request builder"),
    )
    .await
    .expect("request should not fail at the transport level")
}

/// Collect a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

/// Collect a response body as a UTF-8 string.
pub async fn body_text(response: Response) -> String {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("collect body")
        .to_bytes();
    String::from_utf8(bytes.to_vec()).expect("body should be valid UTF-8")
}

/// Insert a submission row the way the external ingestion worker would.
pub async fn insert_submission(pool: &PgPool, id: &str, status: &str, result: Option<&str>) {
    sqlx::query(
        "INSERT INTO formai_db (submission_id, status, result_consulting) VALUES ($1, $2, $3)",
    )
    .bind(id)
    .bind(status)
    .bind(result)
    .execute(pool)
    .await
    .expect("insert test submission");
}

/// Advance a submission's status the way the external worker would.
pub async fn update_submission(pool: &PgPool, id: &str, status: &str, result: Option<&str>) {
    sqlx::query("UPDATE formai_db SET status = $2, result_consulting = $3 WHERE submission_id = $1")
        .bind(id)
        .bind(status)
        .bind(result)
        .execute(pool)
        .await
        .expect("update test submission");
}
