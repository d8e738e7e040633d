// crates/db/tests/queries_tracked_test.rs
//! Integration tests for tracked repository queries and collector targets.

use gh_analytics_db::{CollectionTarget, Database, TrackedRepo};

fn repo(owner: &str, name: &str) -> TrackedRepo {
    TrackedRepo {
        owner: owner.to_string(),
        name: name.to_string(),
    }
}

#[tokio::test]
async fn test_add_tracked_repo_is_idempotent() {
    let db = Database::new_in_memory().await.unwrap();

    db.add_tracked_repo("s1", "octocat", "hello").await.unwrap();
    db.add_tracked_repo("s1", "octocat", "hello").await.unwrap();

    let repos = db.get_tracked_repos("s1").await.unwrap();
    assert_eq!(repos, vec![repo("octocat", "hello")]);

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM tracked_repos")
        .fetch_one(db.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn test_tracked_repos_scoped_to_session_in_insertion_order() {
    let db = Database::new_in_memory().await.unwrap();

    db.add_tracked_repo("s1", "zeta", "last").await.unwrap();
    db.add_tracked_repo("s1", "alpha", "first").await.unwrap();
    db.add_tracked_repo("s2", "octocat", "other").await.unwrap();

    let repos = db.get_tracked_repos("s1").await.unwrap();
    assert_eq!(repos, vec![repo("zeta", "last"), repo("alpha", "first")]);

    assert!(db.get_tracked_repos("unknown").await.unwrap().is_empty());
}

#[tokio::test]
async fn test_collection_targets_skip_sessions_without_token() {
    let db = Database::new_in_memory().await.unwrap();

    db.save_token("with-token", "tok-1").await.unwrap();
    db.add_tracked_repo("with-token", "octocat", "hello").await.unwrap();
    db.add_tracked_repo("no-token", "octocat", "orphan").await.unwrap();

    let targets = db.collection_targets().await.unwrap();
    assert_eq!(
        targets,
        vec![CollectionTarget {
            owner: "octocat".to_string(),
            repo_name: "hello".to_string(),
            token: "tok-1".to_string(),
        }]
    );
}

#[tokio::test]
async fn test_collection_targets_are_distinct_triples() {
    let db = Database::new_in_memory().await.unwrap();

    // Two sessions, same token, same repo: one triple.
    db.save_token("s1", "shared").await.unwrap();
    db.save_token("s2", "shared").await.unwrap();
    db.add_tracked_repo("s1", "octocat", "hello").await.unwrap();
    db.add_tracked_repo("s2", "octocat", "hello").await.unwrap();

    // Different token for the same repo: a second triple.
    db.save_token("s3", "other").await.unwrap();
    db.add_tracked_repo("s3", "octocat", "hello").await.unwrap();

    let targets = db.collection_targets().await.unwrap();
    assert_eq!(targets.len(), 2);
    assert!(targets.iter().all(|t| t.owner == "octocat" && t.repo_name == "hello"));
}

#[tokio::test]
async fn test_collection_targets_follow_token_replacement() {
    let db = Database::new_in_memory().await.unwrap();

    db.save_token("s1", "old").await.unwrap();
    db.add_tracked_repo("s1", "octocat", "hello").await.unwrap();
    db.save_token("s1", "new").await.unwrap();

    let targets = db.collection_targets().await.unwrap();
    assert_eq!(targets.len(), 1);
    assert_eq!(targets[0].token, "new");
}
