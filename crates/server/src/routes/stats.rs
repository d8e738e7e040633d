// crates/server/src/routes/stats.rs
//! Collecting one repository on demand and reading stored history.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use axum_extra::extract::cookie::CookieJar;
use gh_analytics_core::RepoStats;
use gh_analytics_db::RepoSnapshot;
use serde::Serialize;

use super::validate_repo_ref;
use crate::collector;
use crate::error::{ApiError, ApiResult};
use crate::session;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct CollectResponse {
    pub message: String,
    pub data: RepoStats,
}

#[derive(Debug, Serialize)]
pub struct HistoryResponse {
    pub owner: String,
    pub repo: String,
    pub snapshots: Vec<RepoSnapshot>,
}

/// POST /stats/{owner}/{repo} - Collect `owner/repo` now with the session's token.
///
/// Returns 400 when the session has no token or GitHub refuses the
/// repository; nothing is stored in either case.
pub async fn collect_stats(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Path((owner, repo)): Path<(String, String)>,
) -> ApiResult<Json<CollectResponse>> {
    validate_repo_ref(&owner, &repo)?;

    let token = match session::session_id(&jar) {
        Some(id) => state.db.get_token(&id).await?,
        None => None,
    }
    .ok_or(ApiError::MissingToken)?;

    let stats = collector::collect_one(&state.db, state.stats.as_ref(), &owner, &repo, &token).await?;
    tracing::info!(repo = %stats.full_name(), stars = stats.stars, "Stats collected");

    Ok(Json(CollectResponse {
        message: "Stats collected!".to_string(),
        data: stats,
    }))
}

/// GET /history/{owner}/{repo} - Stored daily snapshots, newest first.
pub async fn snapshot_history(
    State(state): State<Arc<AppState>>,
    Path((owner, repo)): Path<(String, String)>,
) -> ApiResult<Json<HistoryResponse>> {
    validate_repo_ref(&owner, &repo)?;
    let snapshots = state.db.snapshot_history(&owner, &repo).await?;
    Ok(Json(HistoryResponse {
        owner,
        repo,
        snapshots,
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/stats/{owner}/{repo}", post(collect_stats))
        .route("/history/{owner}/{repo}", get(snapshot_history))
}
