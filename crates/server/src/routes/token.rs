// crates/server/src/routes/token.rs
//! Token submission.

use std::sync::Arc;

use axum::{extract::State, response::Html, routing::post, Form, Router};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;

use super::dashboard::confirmation;
use crate::error::{ApiError, ApiResult};
use crate::session;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TokenForm {
    pub token: String,
}

/// POST /token - Save a GitHub token for this browser.
///
/// Reuses the session cookie if the browser has one, otherwise mints a new
/// session id. Saving again replaces the previous token.
pub async fn save_token(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    Form(form): Form<TokenForm>,
) -> ApiResult<(CookieJar, Html<String>)> {
    let token = form.token.trim();
    if token.is_empty() {
        return Err(ApiError::BadRequest("token must not be empty".to_string()));
    }

    let session_id = session::session_id(&jar).unwrap_or_else(session::new_session_id);
    state.db.save_token(&session_id, token).await?;
    tracing::info!("Token saved");

    let jar = jar.add(session::session_cookie(session_id));
    Ok((jar, confirmation("Token saved!")))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/token", post(save_token))
}
