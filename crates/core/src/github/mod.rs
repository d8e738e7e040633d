// crates/core/src/github/mod.rs
//! GitHub integration for repository statistics.
//!
//! Provides the `StatsSource` trait and the REST-backed `GithubClient`.

pub mod client;
pub mod provider;
pub mod types;

pub use client::{GithubClient, DEFAULT_API_URL};
pub use provider::StatsSource;
pub use types::{RepoMetadata, TrafficOutcome, TrafficSummary};
