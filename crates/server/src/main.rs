// crates/server/src/main.rs
//! gh-analytics server binary.
//!
//! Opens (or recreates) the SQLite store, wires the GitHub client into the
//! app state, and serves the dashboard.

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use gh_analytics_core::GithubClient;
use gh_analytics_db::Database;
use gh_analytics_server::{create_app, AppState, Config};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "warn,gh_analytics_server=info,gh_analytics_db=info";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .compact()
        .init();

    let config = Config::parse();

    eprintln!("\n\u{1f4ca} gh-analytics v{}\n", env!("CARGO_PKG_VERSION"));

    // Step 1: Open database. Startup starts from an empty store unless told otherwise.
    let db_path = config.db_path()?;
    let db = if config.keep_history {
        Database::open_preserving(&db_path).await
    } else {
        Database::new(&db_path).await
    }
    .with_context(|| format!("failed to open database at {}", db_path.display()))?;
    eprintln!("  \u{2713} Database {}", db_path.display());

    // Step 2: GitHub client
    let client = GithubClient::new(config.github_api_url.clone(), config.github_timeout())
        .context("failed to build GitHub client")?;
    tracing::info!(api = client.base_url(), "GitHub client ready");

    // Step 3: App
    let state = AppState::new(db, Arc::new(client));
    let app = create_app(state);

    // Step 4: Bind and serve
    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    eprintln!("  \u{2192} http://{addr}\n");

    axum::serve(listener, app).await?;
    Ok(())
}
