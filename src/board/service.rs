//! Board services for anonboard.
//!
//! This module provides the high-level thread and reply operations behind
//! the HTTP surface: windowed board listings, creation with secret hashing,
//! reporting, and secret-gated deletion.

use crate::db::Database;
use crate::{secret, BoardError, Result};

use super::reply::{NewReply, Reply};
use super::reply_repository::ReplyRepository;
use super::thread::{NewThread, Thread};
use super::thread_repository::ThreadRepository;

/// Maximum number of threads returned by a board listing.
pub const BOARD_PAGE_SIZE: i64 = 10;

/// Number of recent replies included with each listed thread.
pub const LISTED_REPLY_COUNT: i64 = 3;

/// Outcome of a secret-gated delete request.
///
/// A wrong secret is an expected outcome of a legitimate request, so it is
/// modeled as a value rather than an error. Nothing is mutated in that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Secret matched; the entity was removed.
    Deleted,
    /// Secret missing or mismatched; the entity is untouched.
    IncorrectPassword,
}

/// A thread as shown in a board listing: the thread itself, its most recent
/// replies, and the true total reply count.
#[derive(Debug, Clone)]
pub struct ThreadSummary {
    pub thread: Thread,
    pub replies: Vec<Reply>,
    pub replycount: i64,
}

/// A thread with its full reply collection.
#[derive(Debug, Clone)]
pub struct ThreadDetail {
    pub thread: Thread,
    pub replies: Vec<Reply>,
}

fn validate_text(text: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(BoardError::Validation("text is required".to_string()));
    }
    Ok(())
}

fn validate_secret(plaintext: &str) -> Result<()> {
    if plaintext.is_empty() {
        return Err(BoardError::Validation(
            "delete_password is required".to_string(),
        ));
    }
    Ok(())
}

/// Thread manager: list, create, report and delete threads on a board.
pub struct ThreadService<'a> {
    db: &'a Database,
}

impl<'a> ThreadService<'a> {
    /// Create a new ThreadService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// The most recently bumped threads on a board, each with its most
    /// recent replies and the true total reply count.
    pub async fn list_board(&self, board: &str) -> Result<Vec<ThreadSummary>> {
        let threads = ThreadRepository::new(self.db.pool())
            .list_recent(board, BOARD_PAGE_SIZE)
            .await?;

        let reply_repo = ReplyRepository::new(self.db.pool());
        let mut summaries = Vec::with_capacity(threads.len());
        for thread in threads {
            let replycount = reply_repo.count_by_thread(&thread.id).await?;
            let replies = reply_repo
                .list_recent(&thread.id, LISTED_REPLY_COUNT)
                .await?;
            summaries.push(ThreadSummary {
                thread,
                replies,
                replycount,
            });
        }

        Ok(summaries)
    }

    /// Create a thread on a board.
    ///
    /// A board springs into existence with its first thread; there is no
    /// separate board creation step.
    pub async fn create(&self, board: &str, text: &str, delete_secret: &str) -> Result<Thread> {
        validate_text(text)?;
        validate_secret(delete_secret)?;

        let new_thread = NewThread::new(board, text, secret::hash(delete_secret));
        ThreadRepository::new(self.db.pool())
            .create(&new_thread)
            .await
    }

    /// Flag a thread as reported and bump it.
    pub async fn report(&self, board: &str, thread_id: &str) -> Result<()> {
        let reported = ThreadRepository::new(self.db.pool())
            .report(board, thread_id)
            .await?;
        if !reported {
            return Err(BoardError::NotFound("thread".to_string()));
        }
        Ok(())
    }

    /// Delete a thread and all of its replies if the secret matches.
    pub async fn delete(
        &self,
        board: &str,
        thread_id: &str,
        delete_secret: Option<&str>,
    ) -> Result<DeleteOutcome> {
        let repo = ThreadRepository::new(self.db.pool());
        let thread = repo
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        // An absent secret is a mismatch; never hash the empty input.
        let Some(plaintext) = delete_secret else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };
        if !secret::verify(plaintext, &thread.delete_password) {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        repo.delete_with_digest(board, thread_id, &thread.delete_password)
            .await?;
        Ok(DeleteOutcome::Deleted)
    }
}

/// Reply manager: operations on replies nested under a thread.
pub struct ReplyService<'a> {
    db: &'a Database,
}

impl<'a> ReplyService<'a> {
    /// Create a new ReplyService with the given database reference.
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// A thread with all of its replies, newest first.
    pub async fn thread_detail(&self, board: &str, thread_id: &str) -> Result<ThreadDetail> {
        let thread = ThreadRepository::new(self.db.pool())
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        let replies = ReplyRepository::new(self.db.pool())
            .list_by_thread(thread_id)
            .await?;

        Ok(ThreadDetail { thread, replies })
    }

    /// Post a reply to a thread, bumping the thread.
    pub async fn create(
        &self,
        board: &str,
        thread_id: &str,
        text: &str,
        delete_secret: &str,
    ) -> Result<Reply> {
        validate_text(text)?;
        validate_secret(delete_secret)?;

        let new_reply = NewReply::new(thread_id, text, secret::hash(delete_secret));
        ReplyRepository::new(self.db.pool())
            .create(board, &new_reply)
            .await
    }

    /// Flag a reply as reported.
    pub async fn report(&self, board: &str, thread_id: &str, reply_id: &str) -> Result<()> {
        // The thread lookup scopes the reply to its board.
        ThreadRepository::new(self.db.pool())
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        let reported = ReplyRepository::new(self.db.pool())
            .report(thread_id, reply_id)
            .await?;
        if !reported {
            return Err(BoardError::NotFound("reply".to_string()));
        }
        Ok(())
    }

    /// Delete a reply if the secret matches. The thread itself is untouched.
    pub async fn delete(
        &self,
        board: &str,
        thread_id: &str,
        reply_id: &str,
        delete_secret: Option<&str>,
    ) -> Result<DeleteOutcome> {
        ThreadRepository::new(self.db.pool())
            .get(board, thread_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("thread".to_string()))?;

        let repo = ReplyRepository::new(self.db.pool());
        let reply = repo
            .get(thread_id, reply_id)
            .await?
            .ok_or_else(|| BoardError::NotFound("reply".to_string()))?;

        let Some(plaintext) = delete_secret else {
            return Ok(DeleteOutcome::IncorrectPassword);
        };
        if !secret::verify(plaintext, &reply.delete_password) {
            return Ok(DeleteOutcome::IncorrectPassword);
        }

        repo.delete_with_digest(thread_id, reply_id, &reply.delete_password)
            .await?;
        Ok(DeleteOutcome::Deleted)
    }
}
