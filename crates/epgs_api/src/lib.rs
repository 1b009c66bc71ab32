//! epgs_api — thin HTTP adapter over the EPGS engine (spec §1: an
//! out-of-scope collaborator, documented through interfaces only).
//!
//! Grounded on `aegis-rpc`'s axum + tower + tracing stack. This crate owns
//! no domain logic: every handler deserializes a request, calls into
//! `epgs_pipeline`, and serializes the result.

pub mod config;
pub mod error;
pub mod handlers;

use axum::routing::{get, post};
use axum::Router;
use tower_http::trace::TraceLayer;

pub use config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
}

/// Build the application router. Exposed as a function (not assembled
/// inline in `main`) so integration tests can drive it without binding a
/// real socket.
pub fn app(config: Config) -> Router {
    let state = AppState { config };
    Router::new()
        .route("/run", post(handlers::run))
        .route("/verify", get(handlers::verify))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
