// crates/core/src/paths.rs
//! Centralized path functions for app storage locations.

use std::path::PathBuf;

/// App cache root: `~/Library/Caches/gh-analytics/` (macOS) or `~/.cache/gh-analytics/` (Linux).
pub fn app_cache_dir() -> Option<PathBuf> {
    dirs::cache_dir().map(|d| d.join("gh-analytics"))
}

/// SQLite database file: `<app_cache_dir>/github_analytics.db`.
pub fn db_path() -> Option<PathBuf> {
    app_cache_dir().map(|d| d.join("github_analytics.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_cache_dir() {
        let dir = app_cache_dir();
        assert!(dir.is_some());
        let dir = dir.unwrap();
        assert!(dir.to_string_lossy().contains("gh-analytics"));
    }

    #[test]
    fn test_db_path() {
        let path = db_path();
        assert!(path.is_some());
        let path = path.unwrap();
        assert!(path.to_string_lossy().ends_with("github_analytics.db"));
    }
}
