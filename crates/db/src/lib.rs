//! Database access for the FormAI front-end.
//!
//! Holds the connection provider ([`DbConfig`], [`create_pool`]) and the
//! read-only repository over the externally-owned `formai_db` table.
//! This crate never writes submission rows; the ingestion worker owns
//! all status transitions.

pub mod models;
pub mod repositories;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions, PgSslMode};

use formai_core::CoreError;

pub type DbPool = sqlx::PgPool;

/// Database connection settings, read once at startup from the process
/// environment.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// `POSTGRES_HOST` (required).
    pub host: String,
    /// `POSTGRES_DB` (required).
    pub dbname: String,
    /// `POSTGRES_USER` (required).
    pub user: String,
    /// `POSTGRES_PASSWORD` (required).
    pub password: String,
    /// `POSTGRES_PORT` (optional, default `5432`).
    pub port: u16,
}

impl DbConfig {
    /// Load connection settings from environment variables.
    ///
    /// A missing required variable yields [`CoreError::MissingEnv`]; an
    /// unparsable `POSTGRES_PORT` yields [`CoreError::InvalidEnv`].
    pub fn from_env() -> Result<Self, CoreError> {
        let host = require_env("POSTGRES_HOST")?;
        let dbname = require_env("POSTGRES_DB")?;
        let user = require_env("POSTGRES_USER")?;
        let password = require_env("POSTGRES_PASSWORD")?;

        let port = match std::env::var("POSTGRES_PORT") {
            Ok(raw) => raw.parse().map_err(|_| CoreError::InvalidEnv {
                var: "POSTGRES_PORT",
                reason: format!("not a valid port number: {raw}"),
            })?,
            Err(_) => 5432,
        };

        Ok(Self {
            host,
            dbname,
            user,
            password,
            port,
        })
    }

    /// sqlx connect options for this configuration.
    ///
    /// The transport is always encrypted (`sslmode=require`).
    pub fn connect_options(&self) -> PgConnectOptions {
        PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .database(&self.dbname)
            .username(&self.user)
            .password(&self.password)
            .ssl_mode(PgSslMode::Require)
    }
}

fn require_env(var: &'static str) -> Result<String, CoreError> {
    std::env::var(var).map_err(|_| CoreError::MissingEnv(var))
}

/// Build a lazy connection pool.
///
/// No connection is attempted here: the server must come up even when
/// the store is unreachable, with each request observing the failure
/// individually. Handlers check a connection out per request via
/// `pool.acquire()`; the checkout is returned on drop on every exit
/// path.
pub fn create_pool(config: &DbConfig) -> DbPool {
    PgPoolOptions::new()
        .max_connections(20)
        .connect_lazy_with(config.connect_options())
}

/// Verify the store is reachable by running a trivial query.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}
