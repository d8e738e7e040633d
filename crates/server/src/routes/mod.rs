// crates/server/src/routes/mod.rs
//! Route handlers for the gh-analytics server.

pub mod collect;
pub mod dashboard;
pub mod health;
pub mod stats;
pub mod token;
pub mod tracked;

use std::sync::Arc;

use axum::Router;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// Create the combined router.
///
/// Routes:
/// - GET  / - Dashboard page
/// - POST /token - Save a GitHub token for the session (sets the session cookie)
/// - POST /track - Track a repository and collect it once
/// - GET  /tracked - Repositories tracked by the session
/// - POST /stats/{owner}/{repo} - Collect one repository now
/// - GET  /history/{owner}/{repo} - Stored daily snapshots
/// - POST /auto-collect - Collect every tracked repository
/// - GET  /api/health - Health check
pub fn app_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .merge(dashboard::router())
        .merge(token::router())
        .merge(tracked::router())
        .merge(stats::router())
        .merge(collect::router())
        .nest("/api", health::router())
        .with_state(state)
}

/// Reject owner/repo names GitHub would never issue.
///
/// Names end up in outbound URL paths and in HTML confirmations, so anything
/// outside `[A-Za-z0-9._-]` is refused.
pub(crate) fn validate_repo_ref(owner: &str, repo: &str) -> ApiResult<()> {
    for (label, value) in [("owner", owner), ("repo", repo)] {
        if value.is_empty() {
            return Err(ApiError::BadRequest(format!("{label} must not be empty")));
        }
        if value == "." || value == ".." {
            return Err(ApiError::BadRequest(format!("Invalid {label} '{value}'")));
        }
        if !value
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
        {
            return Err(ApiError::BadRequest(format!("Invalid {label} '{value}'")));
        }
    }
    Ok(())
}
