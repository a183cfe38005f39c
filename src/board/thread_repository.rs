//! Thread repository for anonboard.
//!
//! This module provides CRUD operations for threads in the database.

use uuid::Uuid;

use super::thread::{NewThread, Thread};
use crate::db::DbPool;
use crate::{datetime, BoardError, Result};

const THREAD_COLUMNS: &str = "id, board, text, delete_password, created_on, bumped_on, reported";

/// Repository for thread CRUD operations.
pub struct ThreadRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ThreadRepository<'a> {
    /// Create a new ThreadRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a new thread.
    ///
    /// Assigns the ID and sets created_on equal to bumped_on. Returns the
    /// created thread.
    pub async fn create(&self, new_thread: &NewThread) -> Result<Thread> {
        let id = Uuid::new_v4().to_string();
        let now = datetime::now();

        sqlx::query(
            "INSERT INTO threads (id, board, text, delete_password, created_on, bumped_on)
             VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new_thread.board)
        .bind(&new_thread.text)
        .bind(&new_thread.delete_password)
        .bind(&now)
        .bind(&now)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        self.get(&new_thread.board, &id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))
    }

    /// Get a thread by board name and ID.
    pub async fn get(&self, board: &str, id: &str) -> Result<Option<Thread>> {
        let thread: Option<Thread> = sqlx::query_as(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads WHERE board = ? AND id = ?"
        ))
        .bind(board)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(thread)
    }

    /// List the most recently bumped threads on a board, newest first.
    pub async fn list_recent(&self, board: &str, limit: i64) -> Result<Vec<Thread>> {
        let threads: Vec<Thread> = sqlx::query_as(&format!(
            "SELECT {THREAD_COLUMNS} FROM threads
             WHERE board = ? ORDER BY bumped_on DESC, id DESC LIMIT ?"
        ))
        .bind(board)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(threads)
    }

    /// Flag a thread as reported and bump it, in a single statement.
    ///
    /// Returns false if the board/thread combination does not exist.
    pub async fn report(&self, board: &str, id: &str) -> Result<bool> {
        let result = sqlx::query(
            "UPDATE threads SET reported = 1, bumped_on = ? WHERE board = ? AND id = ?",
        )
        .bind(datetime::now())
        .bind(board)
        .bind(id)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a thread only if the stored digest matches.
    ///
    /// Replies cascade with the thread row. Returns false if no row matched.
    pub async fn delete_with_digest(&self, board: &str, id: &str, digest: &str) -> Result<bool> {
        let result =
            sqlx::query("DELETE FROM threads WHERE board = ? AND id = ? AND delete_password = ?")
                .bind(board)
                .bind(id)
                .bind(digest)
                .execute(self.pool)
                .await
                .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn setup_db() -> Database {
        Database::open_in_memory().await.unwrap()
    }

    #[tokio::test]
    async fn test_create_thread() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "hello world", "digest"))
            .await
            .unwrap();

        assert!(!thread.id.is_empty());
        assert_eq!(thread.board, "general");
        assert_eq!(thread.text, "hello world");
        assert_eq!(thread.delete_password, "digest");
        assert_eq!(thread.created_on, thread.bumped_on);
        assert!(!thread.reported);
    }

    #[tokio::test]
    async fn test_get_scoped_by_board() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "hello", "digest"))
            .await
            .unwrap();

        let found = repo.get("general", &thread.id).await.unwrap();
        assert!(found.is_some());

        // Same ID under another board name must not resolve.
        let other_board = repo.get("random", &thread.id).await.unwrap();
        assert!(other_board.is_none());

        let missing = repo.get("general", "no-such-id").await.unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_list_recent_orders_by_bump() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let first = repo
            .create(&NewThread::new("general", "first", "digest"))
            .await
            .unwrap();
        let second = repo
            .create(&NewThread::new("general", "second", "digest"))
            .await
            .unwrap();

        let threads = repo.list_recent("general", 10).await.unwrap();
        assert_eq!(threads.len(), 2);
        assert_eq!(threads[0].id, second.id);
        assert_eq!(threads[1].id, first.id);

        // Reporting the older thread bumps it back to the top.
        repo.report("general", &first.id).await.unwrap();
        let threads = repo.list_recent("general", 10).await.unwrap();
        assert_eq!(threads[0].id, first.id);
    }

    #[tokio::test]
    async fn test_list_recent_respects_limit() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        for i in 0..5 {
            repo.create(&NewThread::new("general", format!("thread {i}"), "digest"))
                .await
                .unwrap();
        }

        let threads = repo.list_recent("general", 3).await.unwrap();
        assert_eq!(threads.len(), 3);
    }

    #[tokio::test]
    async fn test_list_recent_is_per_board() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        repo.create(&NewThread::new("general", "a", "digest"))
            .await
            .unwrap();
        repo.create(&NewThread::new("random", "b", "digest"))
            .await
            .unwrap();

        let threads = repo.list_recent("general", 10).await.unwrap();
        assert_eq!(threads.len(), 1);
        assert_eq!(threads[0].text, "a");
    }

    #[tokio::test]
    async fn test_report_sets_flag_and_bumps() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "hello", "digest"))
            .await
            .unwrap();

        let reported = repo.report("general", &thread.id).await.unwrap();
        assert!(reported);

        let updated = repo.get("general", &thread.id).await.unwrap().unwrap();
        assert!(updated.reported);
        assert!(updated.bumped_on >= thread.bumped_on);
        // Everything else is untouched.
        assert_eq!(updated.text, thread.text);
        assert_eq!(updated.delete_password, thread.delete_password);
        assert_eq!(updated.created_on, thread.created_on);
    }

    #[tokio::test]
    async fn test_report_missing_thread() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let reported = repo.report("general", "no-such-id").await.unwrap();
        assert!(!reported);
    }

    #[tokio::test]
    async fn test_delete_with_digest() {
        let db = setup_db().await;
        let repo = ThreadRepository::new(db.pool());

        let thread = repo
            .create(&NewThread::new("general", "hello", "digest"))
            .await
            .unwrap();

        // Wrong digest leaves the row in place.
        let deleted = repo
            .delete_with_digest("general", &thread.id, "other-digest")
            .await
            .unwrap();
        assert!(!deleted);
        assert!(repo.get("general", &thread.id).await.unwrap().is_some());

        let deleted = repo
            .delete_with_digest("general", &thread.id, "digest")
            .await
            .unwrap();
        assert!(deleted);
        assert!(repo.get("general", &thread.id).await.unwrap().is_none());
    }
}
