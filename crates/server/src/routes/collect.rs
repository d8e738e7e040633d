// crates/server/src/routes/collect.rs
//! Batch collection trigger.

use std::sync::Arc;

use axum::{extract::State, routing::post, Json, Router};
use serde::Serialize;

use crate::collector;
use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AutoCollectResponse {
    pub message: String,
}

/// POST /auto-collect - Collect every tracked repository before responding.
///
/// Per-repository failures are only logged; the response is the same whether
/// or not any of them failed.
pub async fn auto_collect(State(state): State<Arc<AppState>>) -> ApiResult<Json<AutoCollectResponse>> {
    collector::collect_all(&state.db, state.stats.as_ref()).await?;
    Ok(Json(AutoCollectResponse {
        message: "Auto-collect finished!".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/auto-collect", post(auto_collect))
}
