// crates/db/src/lib.rs
// SQLite store for session tokens, tracked repositories and daily snapshots.

mod queries;
mod schema;

pub use queries::{CollectionTarget, RepoSnapshot, TrackedRepo};

use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous};
use sqlx::SqlitePool;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use thiserror::Error;
use tracing::info;

#[derive(Debug, Error)]
pub enum DbError {
    #[error("SQLite error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("Failed to determine cache directory")]
    NoCacheDir,

    #[error("Database file error: {0}")]
    Io(#[from] std::io::Error),
}

pub type DbResult<T> = Result<T, DbError>;

/// Main database handle wrapping a SQLite connection pool.
///
/// Constructed once at startup and handed to every consumer; cloning is cheap.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
    db_path: PathBuf,
}

impl Database {
    /// Wipe any existing database at `path` and create a fresh schema.
    ///
    /// All previously collected history is discarded.
    pub async fn new(path: &Path) -> DbResult<Self> {
        let removed = remove_database_files(path)?;
        if removed > 0 {
            info!(path = %path.display(), files = removed, "Removed previous database");
        }
        Self::open(path).await
    }

    /// Open (or create) the database at `path`, keeping existing rows.
    pub async fn open_preserving(path: &Path) -> DbResult<Self> {
        Self::open(path).await
    }

    async fn open(path: &Path) -> DbResult<Self> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let options = SqliteConnectOptions::from_str(&format!("sqlite:{}", path.display()))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(std::time::Duration::from_secs(30));

        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;

        let db = Self {
            pool,
            db_path: path.to_owned(),
        };
        db.create_schema().await?;

        info!("Database opened at {}", path.display());
        Ok(db)
    }

    /// Create an in-memory database (for testing).
    ///
    /// Uses `shared_cache(true)` so all pool connections share the same
    /// in-memory database.
    pub async fn new_in_memory() -> DbResult<Self> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?
            .shared_cache(true)
            .busy_timeout(std::time::Duration::from_secs(5));
        let pool = SqlitePoolOptions::new()
            .max_connections(4)
            .connect_with(options)
            .await?;
        let db = Self {
            pool,
            db_path: PathBuf::new(),
        };
        db.create_schema().await?;
        Ok(db)
    }

    async fn create_schema(&self) -> DbResult<()> {
        for statement in schema::SCHEMA {
            sqlx::query(statement).execute(&self.pool).await?;
        }
        Ok(())
    }

    /// Get a reference to the underlying connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the path to the database file.
    /// Returns an empty path for in-memory databases.
    pub fn db_path(&self) -> &Path {
        &self.db_path
    }
}

/// Delete the database file and its WAL/SHM side files. Returns how many existed.
fn remove_database_files(path: &Path) -> std::io::Result<usize> {
    let mut removed = 0;
    for suffix in ["", "-wal", "-shm"] {
        let mut file = path.as_os_str().to_owned();
        file.push(suffix);
        match std::fs::remove_file(&file) {
            Ok(()) => removed += 1,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e),
        }
    }
    Ok(removed)
}

/// Returns the default database path: `~/.cache/gh-analytics/github_analytics.db`
pub fn default_db_path() -> DbResult<PathBuf> {
    gh_analytics_core::paths::db_path().ok_or(DbError::NoCacheDir)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_database() {
        let db = Database::new_in_memory()
            .await
            .expect("should create in-memory database");

        for table in ["user_tokens", "tracked_repos", "repo_stats"] {
            let count: (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
                .fetch_one(db.pool())
                .await
                .expect("table should exist");
            assert_eq!(count.0, 0, "{table} should start empty");
        }
    }

    #[tokio::test]
    async fn test_schema_creation_idempotent() {
        let db = Database::new_in_memory()
            .await
            .expect("first open should succeed");

        db.create_schema()
            .await
            .expect("second schema run should succeed");
    }

    #[tokio::test]
    async fn test_file_based_database() {
        let tmp = tempfile::tempdir().expect("should create temp dir");
        let db_path = tmp.path().join("nested").join("test.db");

        let db = Database::new(&db_path)
            .await
            .expect("should create file-based database");

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM repo_stats")
            .fetch_one(db.pool())
            .await
            .expect("repo_stats table should exist");
        assert_eq!(count.0, 0);
        assert_eq!(db.db_path(), db_path.as_path());
        assert!(db_path.exists(), "database file should be created on disk");
    }

    #[tokio::test]
    async fn test_new_discards_previous_rows() {
        let tmp = tempfile::tempdir().expect("should create temp dir");
        let db_path = tmp.path().join("wipe.db");

        let db = Database::new(&db_path).await.unwrap();
        db.save_token("s1", "tok").await.unwrap();
        db.pool().close().await;

        let db = Database::new(&db_path).await.unwrap();
        assert_eq!(db.get_token("s1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_open_preserving_keeps_rows() {
        let tmp = tempfile::tempdir().expect("should create temp dir");
        let db_path = tmp.path().join("keep.db");

        let db = Database::new(&db_path).await.unwrap();
        db.save_token("s1", "tok").await.unwrap();
        db.pool().close().await;

        let db = Database::open_preserving(&db_path).await.unwrap();
        assert_eq!(db.get_token("s1").await.unwrap().as_deref(), Some("tok"));
    }

    #[test]
    fn test_remove_database_files_missing_is_ok() {
        let tmp = tempfile::tempdir().expect("should create temp dir");
        let removed = remove_database_files(&tmp.path().join("absent.db")).unwrap();
        assert_eq!(removed, 0);
    }

    #[test]
    fn test_default_db_path() {
        let path = default_db_path().expect("should resolve default path");
        assert!(path.to_string_lossy().contains("gh-analytics"));
        assert!(path.to_string_lossy().ends_with("github_analytics.db"));
    }
}
