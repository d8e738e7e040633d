// crates/db/src/schema.rs
//! Inline schema for the analytics database.
//!
//! There is no migration history: the store is recreated on startup, so every
//! statement only needs to be valid against an empty database.

pub const SCHEMA: &[&str] = &[
    // One token per browser session.
    r#"
CREATE TABLE IF NOT EXISTS user_tokens (
    session_id TEXT UNIQUE NOT NULL,
    github_token TEXT NOT NULL,
    created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
);
"#,
    r#"
CREATE TABLE IF NOT EXISTS tracked_repos (
    session_id TEXT NOT NULL,
    owner TEXT NOT NULL,
    repo_name TEXT NOT NULL,
    UNIQUE(session_id, owner, repo_name)
);
"#,
    // At most one row per repository per calendar day.
    r#"
CREATE TABLE IF NOT EXISTS repo_stats (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    owner TEXT NOT NULL,
    repo_name TEXT NOT NULL,
    date DATE NOT NULL,
    views INTEGER DEFAULT 0,
    unique_visitors INTEGER DEFAULT 0,
    clones INTEGER DEFAULT 0,
    unique_clones INTEGER DEFAULT 0,
    stars INTEGER DEFAULT 0,
    forks INTEGER DEFAULT 0,
    collected_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP,
    UNIQUE(owner, repo_name, date)
);
"#,
    r#"CREATE INDEX IF NOT EXISTS idx_tracked_repos_session ON tracked_repos(session_id);"#,
];
