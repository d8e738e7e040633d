// crates/core/src/github/types.rs
//! Typed shapes of the three GitHub payloads the collector reads.

use serde::Deserialize;

use crate::types::TrafficCounts;

/// Subset of `GET /repos/{owner}/{repo}`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RepoMetadata {
    #[serde(default)]
    pub stargazers_count: i64,
    #[serde(default)]
    pub forks_count: i64,
}

/// Subset of `GET /repos/{owner}/{repo}/traffic/views` and `.../traffic/clones`.
///
/// Both endpoints share the same top-level `count`/`uniques` totals.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TrafficSummary {
    #[serde(flatten)]
    pub totals: TrafficCounts,
}

/// Result of one traffic call.
///
/// Traffic requires push access on the repository; tokens without it get a
/// 403, and GitHub answers 404 for repositories it hides from the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrafficOutcome {
    /// GitHub returned totals for the last 14 days.
    Reported(TrafficCounts),
    /// Non-success status. Counts are not known.
    Unavailable { status: u16 },
}

impl TrafficOutcome {
    /// Counts to store. Unavailable traffic is recorded as zero.
    ///
    /// This treats "forbidden" the same as "no traffic"; callers that need the
    /// distinction must match on the outcome instead.
    pub fn counts_or_zero(self) -> TrafficCounts {
        match self {
            Self::Reported(counts) => counts,
            Self::Unavailable { .. } => TrafficCounts::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_ignores_unknown_fields() {
        let json = r#"{"id": 1, "full_name": "a/b", "stargazers_count": 42, "forks_count": 3}"#;
        let meta: RepoMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(meta.stargazers_count, 42);
        assert_eq!(meta.forks_count, 3);
    }

    #[test]
    fn test_metadata_missing_counts_default_to_zero() {
        let meta: RepoMetadata = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        assert_eq!(meta.stargazers_count, 0);
        assert_eq!(meta.forks_count, 0);
    }

    #[test]
    fn test_traffic_summary_reads_totals_and_ignores_daily_breakdown() {
        let json = r#"{
            "count": 14,
            "uniques": 3,
            "views": [{"timestamp": "2026-10-18T00:00:00Z", "count": 14, "uniques": 3}]
        }"#;
        let summary: TrafficSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.totals, TrafficCounts { count: 14, uniques: 3 });
    }

    #[test]
    fn test_unavailable_traffic_counts_as_zero() {
        let outcome = TrafficOutcome::Unavailable { status: 403 };
        assert_eq!(outcome.counts_or_zero(), TrafficCounts::default());

        let outcome = TrafficOutcome::Reported(TrafficCounts { count: 9, uniques: 2 });
        assert_eq!(outcome.counts_or_zero().count, 9);
    }
}
