//! FormAI results front-end.
//!
//! Exposes the building blocks (config, state, error handling, routes,
//! view resolution) so integration tests and the binary entrypoint can
//! both access them.

pub mod config;
pub mod error;
pub mod handlers;
pub mod render;
pub mod router;
pub mod routes;
pub mod state;
pub mod view;
