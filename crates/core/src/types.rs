// crates/core/src/types.rs
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Normalized statistics for one repository at one point in time.
///
/// Produced by a [`StatsSource`](crate::github::StatsSource) and persisted as the
/// day's snapshot for `(owner, repo_name)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RepoStats {
    pub owner: String,
    pub repo_name: String,
    pub stars: i64,
    pub forks: i64,
    pub views: i64,
    pub unique_visitors: i64,
    pub clones: i64,
    pub unique_clones: i64,
    pub collected_at: DateTime<Utc>,
}

impl RepoStats {
    /// `owner/repo` for log lines and messages.
    pub fn full_name(&self) -> String {
        format!("{}/{}", self.owner, self.repo_name)
    }
}

/// Count + unique-count pair reported by the traffic endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrafficCounts {
    #[serde(default)]
    pub count: i64,
    #[serde(default)]
    pub uniques: i64,
}
