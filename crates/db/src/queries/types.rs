// crates/db/src/queries/types.rs
// Row types returned by the query modules and exported to the server crate.

use serde::Serialize;

/// A repository the session asked to track.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackedRepo {
    pub owner: String,
    pub name: String,
}

/// One unit of work for the batch collector: a tracked repository and the
/// token of the session that tracks it.
#[derive(Clone, PartialEq, Eq)]
pub struct CollectionTarget {
    pub owner: String,
    pub repo_name: String,
    pub token: String,
}

// Keeps tokens out of logs.
impl std::fmt::Debug for CollectionTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CollectionTarget")
            .field("owner", &self.owner)
            .field("repo_name", &self.repo_name)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// A stored daily snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RepoSnapshot {
    pub owner: String,
    pub repo_name: String,
    /// Calendar date, `YYYY-MM-DD`.
    pub date: String,
    pub views: i64,
    pub unique_visitors: i64,
    pub clones: i64,
    pub unique_clones: i64,
    pub stars: i64,
    pub forks: i64,
    /// RFC 3339 timestamp of the collection that wrote this row.
    pub collected_at: String,
}

impl<'r> sqlx::FromRow<'r, sqlx::sqlite::SqliteRow> for RepoSnapshot {
    fn from_row(row: &'r sqlx::sqlite::SqliteRow) -> Result<Self, sqlx::Error> {
        use sqlx::Row;
        Ok(Self {
            owner: row.try_get("owner")?,
            repo_name: row.try_get("repo_name")?,
            date: row.try_get("date")?,
            views: row.try_get("views")?,
            unique_visitors: row.try_get("unique_visitors")?,
            clones: row.try_get("clones")?,
            unique_clones: row.try_get("unique_clones")?,
            stars: row.try_get("stars")?,
            forks: row.try_get("forks")?,
            collected_at: row.try_get("collected_at")?,
        })
    }
}
