// crates/server/src/collector.rs
//! Snapshot collection: one repository on demand, or every tracked repository in a sweep.

use std::time::Instant;

use gh_analytics_core::{GithubError, RepoStats, StatsSource};
use gh_analytics_db::{Database, DbError, DbResult};
use thiserror::Error;

/// Why collecting a single repository failed.
#[derive(Debug, Error)]
pub enum CollectError {
    #[error(transparent)]
    Fetch(#[from] GithubError),

    #[error(transparent)]
    Store(#[from] DbError),
}

/// Outcome counts of one sweep. Only used for logging and tests; the HTTP
/// caller receives a static acknowledgement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectSummary {
    pub attempted: usize,
    pub collected: usize,
    pub failed: usize,
}

/// Fetch stats for `owner/repo` and store them as today's snapshot.
///
/// Nothing is written when the fetch fails.
pub async fn collect_one(
    db: &Database,
    source: &dyn StatsSource,
    owner: &str,
    repo: &str,
    token: &str,
) -> Result<RepoStats, CollectError> {
    let stats = source.fetch_stats(owner, repo, token).await?;
    db.upsert_snapshot(&stats).await?;
    Ok(stats)
}

/// Collect every tracked repository that has a token, one after another.
///
/// A failing repository is logged and skipped; it never stops the sweep.
/// Only failing to read the work list is returned as an error.
pub async fn collect_all(db: &Database, source: &dyn StatsSource) -> DbResult<CollectSummary> {
    let start = Instant::now();
    let targets = db.collection_targets().await?;
    tracing::info!(repos = targets.len(), "Auto-collect started");

    let mut summary = CollectSummary {
        attempted: targets.len(),
        ..Default::default()
    };

    for target in &targets {
        match collect_one(db, source, &target.owner, &target.repo_name, &target.token).await {
            Ok(stats) => {
                summary.collected += 1;
                tracing::info!(repo = %stats.full_name(), stars = stats.stars, "Collected");
            }
            Err(e) => {
                summary.failed += 1;
                tracing::warn!(
                    owner = %target.owner,
                    repo = %target.repo_name,
                    error = %e,
                    "Collection failed, skipping"
                );
            }
        }
    }

    tracing::info!(
        attempted = summary.attempted,
        collected = summary.collected,
        failed = summary.failed,
        duration_secs = start.elapsed().as_secs_f64(),
        "Auto-collect complete"
    );
    Ok(summary)
}
