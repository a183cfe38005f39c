//! Response DTOs for the board API.
//!
//! Secret digests and the reported flag are internal moderation state and
//! have no field here, so they can never reach a client.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::board::{DeleteOutcome, Reply, Thread, ThreadDetail, ThreadSummary};

/// A reply as returned to clients.
#[derive(Debug, Serialize)]
pub struct ReplyResponse {
    /// Reply ID.
    pub id: String,
    /// Reply text.
    pub text: String,
    /// Creation timestamp (ISO-8601).
    pub created_on: String,
}

impl From<Reply> for ReplyResponse {
    fn from(reply: Reply) -> Self {
        Self {
            id: reply.id,
            text: reply.text,
            created_on: reply.created_on,
        }
    }
}

/// A thread in a board listing: truncated recent replies plus the true total.
#[derive(Debug, Serialize)]
pub struct ThreadSummaryResponse {
    /// Thread ID.
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Creation timestamp (ISO-8601).
    pub created_on: String,
    /// Last bump timestamp (ISO-8601).
    pub bumped_on: String,
    /// Most recent replies, newest first.
    pub replies: Vec<ReplyResponse>,
    /// Total number of replies, including those not listed.
    pub replycount: i64,
}

impl From<ThreadSummary> for ThreadSummaryResponse {
    fn from(summary: ThreadSummary) -> Self {
        Self {
            id: summary.thread.id,
            board: summary.thread.board,
            text: summary.thread.text,
            created_on: summary.thread.created_on,
            bumped_on: summary.thread.bumped_on,
            replies: summary.replies.into_iter().map(Into::into).collect(),
            replycount: summary.replycount,
        }
    }
}

/// A thread with its full reply collection.
#[derive(Debug, Serialize)]
pub struct ThreadDetailResponse {
    /// Thread ID.
    pub id: String,
    /// Board name.
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Creation timestamp (ISO-8601).
    pub created_on: String,
    /// Last bump timestamp (ISO-8601).
    pub bumped_on: String,
    /// All replies, newest first.
    pub replies: Vec<ReplyResponse>,
}

impl From<ThreadDetail> for ThreadDetailResponse {
    fn from(detail: ThreadDetail) -> Self {
        Self {
            id: detail.thread.id,
            board: detail.thread.board,
            text: detail.thread.text,
            created_on: detail.thread.created_on,
            bumped_on: detail.thread.bumped_on,
            replies: detail.replies.into_iter().map(Into::into).collect(),
        }
    }
}

impl From<Thread> for ThreadDetailResponse {
    fn from(thread: Thread) -> Self {
        Self {
            id: thread.id,
            board: thread.board,
            text: thread.text,
            created_on: thread.created_on,
            bumped_on: thread.bumped_on,
            replies: vec![],
        }
    }
}

/// Stable literal response bodies for report and delete outcomes.
///
/// Clients pattern-match on these exact strings, so they are kept in one
/// place instead of being scattered through the handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The entity was flagged as reported.
    Reported,
    /// The delete secret matched and the entity was removed.
    DeleteSucceeded,
    /// The delete secret was missing or wrong; nothing changed.
    IncorrectPassword,
}

impl ActionOutcome {
    /// The literal body sent to the client.
    pub fn as_str(self) -> &'static str {
        match self {
            ActionOutcome::Reported => "reported",
            ActionOutcome::DeleteSucceeded => "success",
            ActionOutcome::IncorrectPassword => "incorrect password",
        }
    }
}

impl From<DeleteOutcome> for ActionOutcome {
    fn from(outcome: DeleteOutcome) -> Self {
        match outcome {
            DeleteOutcome::Deleted => ActionOutcome::DeleteSucceeded,
            DeleteOutcome::IncorrectPassword => ActionOutcome::IncorrectPassword,
        }
    }
}

impl IntoResponse for ActionOutcome {
    fn into_response(self) -> Response {
        (StatusCode::OK, self.as_str()).into_response()
    }
}
