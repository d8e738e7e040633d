// crates/core/src/github/client.rs
//! GitHub REST API client: one metadata call plus two traffic calls per repository.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use super::provider::StatsSource;
use super::types::{RepoMetadata, TrafficOutcome, TrafficSummary};
use crate::error::GithubError;
use crate::types::RepoStats;

/// Public GitHub API root.
pub const DEFAULT_API_URL: &str = "https://api.github.com";

const ACCEPT_V3: &str = "application/vnd.github.v3+json";
const USER_AGENT: &str = concat!("gh-analytics/", env!("CARGO_PKG_VERSION"));

/// Statistics source backed by the GitHub REST API.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    base_url: String,
}

impl GithubClient {
    /// Create a client against `base_url` (normally [`DEFAULT_API_URL`]).
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, GithubError> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn repo_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{owner}/{repo}", self.base_url)
    }

    fn get(&self, url: &str, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header("Authorization", format!("token {token}"))
            .header("Accept", ACCEPT_V3)
    }

    async fn fetch_metadata(&self, url: &str, token: &str) -> Result<RepoMetadata, GithubError> {
        let resp = self.get(url, token).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(GithubError::api(status.as_u16()));
        }
        Ok(resp.json::<RepoMetadata>().await?)
    }

    async fn fetch_traffic(&self, url: &str, token: &str) -> Result<TrafficOutcome, GithubError> {
        let resp = self.get(url, token).send().await?;
        let status = resp.status();
        if !status.is_success() {
            tracing::debug!(
                url = %url,
                status = status.as_u16(),
                "Traffic unavailable, counting as zero"
            );
            return Ok(TrafficOutcome::Unavailable {
                status: status.as_u16(),
            });
        }
        let summary = resp.json::<TrafficSummary>().await?;
        Ok(TrafficOutcome::Reported(summary.totals))
    }
}

#[async_trait]
impl StatsSource for GithubClient {
    async fn fetch_stats(
        &self,
        owner: &str,
        repo: &str,
        token: &str,
    ) -> Result<RepoStats, GithubError> {
        let repo_url = self.repo_url(owner, repo);

        let metadata = self.fetch_metadata(&repo_url, token).await?;
        let views = self
            .fetch_traffic(&format!("{repo_url}/traffic/views"), token)
            .await?
            .counts_or_zero();
        let clones = self
            .fetch_traffic(&format!("{repo_url}/traffic/clones"), token)
            .await?
            .counts_or_zero();

        Ok(RepoStats {
            owner: owner.to_string(),
            repo_name: repo.to_string(),
            stars: metadata.stargazers_count,
            forks: metadata.forks_count,
            views: views.count,
            unique_visitors: views.uniques,
            clones: clones.count,
            unique_clones: clones.uniques,
            collected_at: Utc::now(),
        })
    }
}
