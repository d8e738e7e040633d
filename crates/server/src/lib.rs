// crates/server/src/lib.rs
//! gh-analytics server library.
//!
//! Axum app that stores GitHub tokens per browser session, tracks repositories,
//! and records one statistics snapshot per repository per day.

pub mod collector;
pub mod config;
pub mod error;
pub mod routes;
pub mod session;
pub mod state;

#[cfg(test)]
pub(crate) mod test_support;

pub use config::Config;
pub use error::*;
pub use routes::app_routes;
pub use state::AppState;

use std::sync::Arc;

use axum::Router;
use tower_http::trace::TraceLayer;

/// Create the Axum application with all routes and request tracing.
pub fn create_app(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(app_routes(state))
        .layer(TraceLayer::new_for_http())
}

// ============================================================================
// Router Tests
// ============================================================================
