// crates/db/src/queries/tracked.rs
//! Tracked repository queries.

use super::{CollectionTarget, TrackedRepo};
use crate::{Database, DbResult};

impl Database {
    /// Track `owner/repo` for a session. Adding an existing pair is a no-op.
    pub async fn add_tracked_repo(&self, session_id: &str, owner: &str, repo: &str) -> DbResult<()> {
        sqlx::query(
            "INSERT OR IGNORE INTO tracked_repos (session_id, owner, repo_name) VALUES (?1, ?2, ?3)",
        )
        .bind(session_id)
        .bind(owner)
        .bind(repo)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Repositories tracked by a session, in the order they were added.
    pub async fn get_tracked_repos(&self, session_id: &str) -> DbResult<Vec<TrackedRepo>> {
        let rows: Vec<(String, String)> = sqlx::query_as(
            "SELECT owner, repo_name FROM tracked_repos WHERE session_id = ?1 ORDER BY rowid",
        )
        .bind(session_id)
        .fetch_all(self.pool())
        .await?;
        Ok(rows
            .into_iter()
            .map(|(owner, name)| TrackedRepo { owner, name })
            .collect())
    }

    /// Every distinct (owner, repo, token) triple across all sessions.
    ///
    /// Sessions that track repositories but never saved a token drop out of the join.
    pub async fn collection_targets(&self) -> DbResult<Vec<CollectionTarget>> {
        let rows: Vec<(String, String, String)> = sqlx::query_as(
            r#"
            SELECT DISTINCT tr.owner, tr.repo_name, ut.github_token
            FROM tracked_repos tr
            JOIN user_tokens ut ON tr.session_id = ut.session_id
            ORDER BY tr.owner, tr.repo_name
            "#,
        )
        .fetch_all(self.pool())
        .await?;
        Ok(rows
            .into_iter()
            .map(|(owner, repo_name, token)| CollectionTarget {
                owner,
                repo_name,
                token,
            })
            .collect())
    }
}
