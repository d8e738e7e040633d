// crates/db/src/queries/snapshots.rs
//! Daily repository statistics snapshots.

use chrono::Local;
use gh_analytics_core::RepoStats;

use super::RepoSnapshot;
use crate::{Database, DbResult};

/// Today's date on the server clock, in the `YYYY-MM-DD` form stored in `repo_stats.date`.
pub(crate) fn today() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

impl Database {
    /// Record `stats` as today's snapshot for its repository.
    ///
    /// The date always comes from the server clock. A second call on the same
    /// day replaces every column of the earlier row.
    pub async fn upsert_snapshot(&self, stats: &RepoStats) -> DbResult<()> {
        self.upsert_snapshot_on(&today(), stats).await
    }

    async fn upsert_snapshot_on(&self, date: &str, stats: &RepoStats) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO repo_stats
                (owner, repo_name, date, views, unique_visitors, clones, unique_clones, stars, forks, collected_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10)
            ON CONFLICT(owner, repo_name, date) DO UPDATE SET
                views = excluded.views,
                unique_visitors = excluded.unique_visitors,
                clones = excluded.clones,
                unique_clones = excluded.unique_clones,
                stars = excluded.stars,
                forks = excluded.forks,
                collected_at = excluded.collected_at
            "#,
        )
        .bind(&stats.owner)
        .bind(&stats.repo_name)
        .bind(date)
        .bind(stats.views)
        .bind(stats.unique_visitors)
        .bind(stats.clones)
        .bind(stats.unique_clones)
        .bind(stats.stars)
        .bind(stats.forks)
        .bind(stats.collected_at.to_rfc3339())
        .execute(self.pool())
        .await?;

        tracing::debug!(owner = %stats.owner, repo = %stats.repo_name, date, "Snapshot upserted");
        Ok(())
    }

    /// All stored snapshots for `owner/repo`, newest date first.
    pub async fn snapshot_history(&self, owner: &str, repo: &str) -> DbResult<Vec<RepoSnapshot>> {
        let rows = sqlx::query_as::<_, RepoSnapshot>(
            r#"
            SELECT owner, repo_name, date, views, unique_visitors, clones, unique_clones,
                   stars, forks, collected_at
            FROM repo_stats
            WHERE owner = ?1 AND repo_name = ?2
            ORDER BY date DESC
            "#,
        )
        .bind(owner)
        .bind(repo)
        .fetch_all(self.pool())
        .await?;
        Ok(rows)
    }
}
