// crates/server/src/routes/dashboard.rs
//! The dashboard page and the small HTML confirmations returned by form posts.

use std::sync::Arc;

use axum::{response::Html, routing::get, Router};

use crate::state::AppState;

const DASHBOARD_HTML: &str = include_str!("../../assets/dashboard.html");

/// GET / - Dashboard page. All data is loaded client-side.
pub async fn dashboard() -> Html<&'static str> {
    Html(DASHBOARD_HTML)
}

/// Confirmation fragment with a link back to the dashboard.
///
/// `message` must already be HTML-safe.
pub(crate) fn confirmation(message: &str) -> Html<String> {
    Html(format!("&#x2705; {message} <a href='/'>Back</a>"))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/", get(dashboard))
}
