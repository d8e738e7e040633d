// crates/server/src/test_support.rs
//! In-process stand-in for GitHub used by the unit tests.

use std::collections::HashSet;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use gh_analytics_core::{GithubError, RepoStats, StatsSource};

/// Answers every repository with fixed counts, except the `owner/repo`
/// names listed as failing, which get a 404.
#[derive(Default)]
pub struct FakeSource {
    failing: HashSet<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl FakeSource {
    pub fn failing(repos: &[&str]) -> Self {
        Self {
            failing: repos.iter().map(|r| r.to_string()).collect(),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// `owner/repo` of every call so far, in order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(r, _)| r.clone()).collect()
    }

    /// Token passed with every call so far, in order.
    pub fn tokens(&self) -> Vec<String> {
        self.calls.lock().unwrap().iter().map(|(_, t)| t.clone()).collect()
    }
}

#[async_trait]
impl StatsSource for FakeSource {
    async fn fetch_stats(
        &self,
        owner: &str,
        repo: &str,
        token: &str,
    ) -> Result<RepoStats, GithubError> {
        let full_name = format!("{owner}/{repo}");
        self.calls
            .lock()
            .unwrap()
            .push((full_name.clone(), token.to_string()));

        if self.failing.contains(&full_name) {
            return Err(GithubError::api(404));
        }
        Ok(RepoStats {
            owner: owner.to_string(),
            repo_name: repo.to_string(),
            stars: 42,
            forks: 7,
            views: 100,
            unique_visitors: 20,
            clones: 9,
            unique_clones: 3,
            collected_at: Utc::now(),
        })
    }
}
