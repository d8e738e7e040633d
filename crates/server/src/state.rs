// crates/server/src/state.rs
//! Application state for the Axum server.

use std::sync::Arc;
use std::time::Instant;

use gh_analytics_core::StatsSource;
use gh_analytics_db::Database;

/// Shared application state accessible from all route handlers.
pub struct AppState {
    /// Server start time for uptime tracking.
    pub start_time: Instant,
    /// Database handle for tokens, tracked repositories and snapshots.
    pub db: Database,
    /// Where fresh repository statistics come from (GitHub in production).
    pub stats: Arc<dyn StatsSource>,
}

impl AppState {
    /// Create a new application state wrapped in an Arc for sharing.
    pub fn new(db: Database, stats: Arc<dyn StatsSource>) -> Arc<Self> {
        Arc::new(Self {
            start_time: Instant::now(),
            db,
            stats,
        })
    }

    /// Get the server uptime in seconds.
    pub fn uptime_secs(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
