// crates/server/src/routes/tracked.rs
//! Tracking repositories for a session.

use std::sync::Arc;

use axum::{
    extract::State,
    response::Html,
    routing::{get, post},
    Form, Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use gh_analytics_db::TrackedRepo;
use serde::{Deserialize, Serialize};

use super::dashboard::confirmation;
use super::validate_repo_ref;
use crate::collector;
use crate::error::{ApiError, ApiResult};
use crate::session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TrackForm {
    pub owner: String,
    pub repo: String,
}

#[derive(Debug, Serialize)]
pub struct TrackedResponse {
    pub repos: Vec<TrackedRepo>,
}

/// POST /track - Track `owner/repo` for this session.
///
/// Requires a session. If the session has a token the repository is collected
/// once right away; a failed collection is logged and does not fail the request.
pub async fn track_repo(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<TrackForm>,
) -> ApiResult<Html<String>> {
    let session_id = session::session_id(&jar).ok_or(ApiError::MissingToken)?;
    let owner = form.owner.trim();
    let repo = form.repo.trim();
    validate_repo_ref(owner, repo)?;

    state.db.add_tracked_repo(&session_id, owner, repo).await?;
    tracing::info!(owner = %owner, repo = %repo, "Repository tracked");

    if let Some(token) = state.db.get_token(&session_id).await? {
        if let Err(e) =
            collector::collect_one(&state.db, state.stats.as_ref(), owner, repo, &token).await
        {
            tracing::warn!(owner = %owner, repo = %repo, error = %e, "Initial collection failed");
        }
    }

    Ok(confirmation(&format!("{owner}/{repo} added!")))
}

/// GET /tracked - Repositories tracked by this session. Empty without a session.
pub async fn list_tracked(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> ApiResult<Json<TrackedResponse>> {
    let repos = match session::session_id(&jar) {
        Some(id) => state.db.get_tracked_repos(&id).await?,
        None => Vec::new(),
    };
    Ok(Json(TrackedResponse { repos }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/track", post(track_repo))
        .route("/tracked", get(list_tracked))
}
