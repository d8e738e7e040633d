// crates/server/src/config.rs
//! Command-line and environment configuration for the server binary.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use gh_analytics_core::github::DEFAULT_API_URL;
use gh_analytics_db::DbResult;

/// Default port for the server.
pub const DEFAULT_PORT: u16 = 8000;

/// Personal GitHub repository analytics dashboard.
#[derive(Debug, Clone, Parser)]
#[command(name = "gh-analytics", version, about)]
pub struct Config {
    /// Address to bind.
    #[arg(long, env = "GH_ANALYTICS_HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to bind. Falls back to `PORT`, then 8000.
    #[arg(long, env = "GH_ANALYTICS_PORT")]
    pub port: Option<u16>,

    /// SQLite database file. Defaults to the user cache directory.
    #[arg(long, env = "GH_ANALYTICS_DB")]
    pub db_path: Option<PathBuf>,

    /// GitHub REST API root.
    #[arg(long, env = "GITHUB_API_URL", default_value = DEFAULT_API_URL)]
    pub github_api_url: String,

    /// Per-request timeout for GitHub calls, in seconds.
    #[arg(long, env = "GH_ANALYTICS_GITHUB_TIMEOUT", default_value_t = 30)]
    pub github_timeout_secs: u64,

    /// Keep the existing database instead of recreating it on startup.
    #[arg(long, env = "GH_ANALYTICS_KEEP_HISTORY")]
    pub keep_history: bool,
}

impl Config {
    pub fn port(&self) -> u16 {
        self.port
            .or_else(|| std::env::var("PORT").ok().and_then(|p| p.parse().ok()))
            .unwrap_or(DEFAULT_PORT)
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port())
    }

    pub fn db_path(&self) -> DbResult<PathBuf> {
        match &self.db_path {
            Some(path) => Ok(path.clone()),
            None => gh_analytics_db::default_db_path(),
        }
    }

    pub fn github_timeout(&self) -> Duration {
        Duration::from_secs(self.github_timeout_secs)
    }
}
