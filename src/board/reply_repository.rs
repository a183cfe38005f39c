//! Reply repository for anonboard.
//!
//! This module provides CRUD operations for replies in the database.

use uuid::Uuid;

use super::reply::{NewReply, Reply};
use crate::db::DbPool;
use crate::{datetime, BoardError, Result};

const REPLY_COLUMNS: &str = "id, thread_id, text, delete_password, created_on, reported";

/// Repository for reply CRUD operations.
pub struct ReplyRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> ReplyRepository<'a> {
    /// Create a new ReplyRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Insert a reply and bump its parent thread, in one transaction.
    ///
    /// The bump doubles as the existence check: zero rows updated means the
    /// board/thread combination does not exist and nothing is written.
    pub async fn create(&self, board: &str, new_reply: &NewReply) -> Result<Reply> {
        let id = Uuid::new_v4().to_string();
        let now = datetime::now();

        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        let bumped = sqlx::query("UPDATE threads SET bumped_on = ? WHERE board = ? AND id = ?")
            .bind(&now)
            .bind(board)
            .bind(&new_reply.thread_id)
            .execute(&mut *tx)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        if bumped.rows_affected() == 0 {
            return Err(BoardError::NotFound("thread".to_string()));
        }

        sqlx::query(
            "INSERT INTO replies (id, thread_id, text, delete_password, created_on)
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(&new_reply.thread_id)
        .bind(&new_reply.text)
        .bind(&new_reply.delete_password)
        .bind(&now)
        .execute(&mut *tx)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        tx.commit()
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        self.get(&new_reply.thread_id, &id)
            .await?
            .ok_or_else(|| BoardError::NotFound("reply".to_string()))
    }

    /// Get a reply by thread ID and reply ID.
    pub async fn get(&self, thread_id: &str, id: &str) -> Result<Option<Reply>> {
        let reply: Option<Reply> = sqlx::query_as(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies WHERE thread_id = ? AND id = ?"
        ))
        .bind(thread_id)
        .bind(id)
        .fetch_optional(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(reply)
    }

    /// List all replies for a thread, newest first.
    pub async fn list_by_thread(&self, thread_id: &str) -> Result<Vec<Reply>> {
        let replies: Vec<Reply> = sqlx::query_as(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies
             WHERE thread_id = ? ORDER BY created_on DESC, id DESC"
        ))
        .bind(thread_id)
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(replies)
    }

    /// List the newest replies for a thread, up to `limit`.
    pub async fn list_recent(&self, thread_id: &str, limit: i64) -> Result<Vec<Reply>> {
        let replies: Vec<Reply> = sqlx::query_as(&format!(
            "SELECT {REPLY_COLUMNS} FROM replies
             WHERE thread_id = ? ORDER BY created_on DESC, id DESC LIMIT ?"
        ))
        .bind(thread_id)
        .bind(limit)
        .fetch_all(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(replies)
    }

    /// Count all replies for a thread.
    pub async fn count_by_thread(&self, thread_id: &str) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE thread_id = ?")
            .bind(thread_id)
            .fetch_one(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(count)
    }

    /// Flag a reply as reported, in a single statement.
    ///
    /// Returns false if the thread/reply combination does not exist.
    pub async fn report(&self, thread_id: &str, id: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE replies SET reported = 1 WHERE thread_id = ? AND id = ?")
            .bind(thread_id)
            .bind(id)
            .execute(self.pool)
            .await
            .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    /// Delete a reply only if the stored digest matches.
    ///
    /// The parent thread is untouched. Returns false if no row matched.
    pub async fn delete_with_digest(
        &self,
        thread_id: &str,
        id: &str,
        digest: &str,
    ) -> Result<bool> {
        let result = sqlx::query(
            "DELETE FROM replies WHERE thread_id = ? AND id = ? AND delete_password = ?",
        )
        .bind(thread_id)
        .bind(id)
        .bind(digest)
        .execute(self.pool)
        .await
        .map_err(|e| BoardError::Database(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }
}
