// crates/core/src/github/provider.rs
//! StatsSource trait defining the interface for repository statistics providers.

use async_trait::async_trait;

use crate::error::GithubError;
use crate::types::RepoStats;

/// Something that can produce a fresh [`RepoStats`] for a repository.
///
/// Implementations include:
/// - `GithubClient`, backed by the GitHub REST API
/// - test doubles in the collector and route tests
#[async_trait]
pub trait StatsSource: Send + Sync {
    /// Collect current statistics for `owner/repo` using the given access token.
    async fn fetch_stats(&self, owner: &str, repo: &str, token: &str)
        -> Result<RepoStats, GithubError>;
}
