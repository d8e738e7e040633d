// crates/db/src/queries/tokens.rs
//! Session token queries.

use crate::{Database, DbResult};

impl Database {
    /// Store the access token for a session, replacing any previous one.
    pub async fn save_token(&self, session_id: &str, token: &str) -> DbResult<()> {
        sqlx::query(
            r#"
            INSERT INTO user_tokens (session_id, github_token)
            VALUES (?1, ?2)
            ON CONFLICT(session_id) DO UPDATE SET
                github_token = excluded.github_token,
                created_at = CURRENT_TIMESTAMP
            "#,
        )
        .bind(session_id)
        .bind(token)
        .execute(self.pool())
        .await?;
        Ok(())
    }

    /// Read the access token for a session, if one was saved.
    pub async fn get_token(&self, session_id: &str) -> DbResult<Option<String>> {
        let row: Option<(String,)> =
            sqlx::query_as("SELECT github_token FROM user_tokens WHERE session_id = ?1")
                .bind(session_id)
                .fetch_optional(self.pool())
                .await?;
        Ok(row.map(|(token,)| token))
    }
}

#[cfg(test)]
mod tests {
    use crate::Database;

    #[tokio::test]
    async fn test_missing_session_has_no_token() {
        let db = Database::new_in_memory().await.unwrap();
        assert_eq!(db.get_token("nobody").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_replace_keeps_single_row() {
        let db = Database::new_in_memory().await.unwrap();
        db.save_token("s1", "first").await.unwrap();
        db.save_token("s1", "second").await.unwrap();

        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM user_tokens")
            .fetch_one(db.pool())
            .await
            .unwrap();
        assert_eq!(count, 1);
        assert_eq!(db.get_token("s1").await.unwrap().as_deref(), Some("second"));
    }
}
