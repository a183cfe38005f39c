//! Thread model for anonboard.

/// Thread entity: a top-level post on a named board.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Thread {
    /// Opaque unique thread ID.
    pub id: String,
    /// Name of the board this thread lives on.
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Digest of the delete secret. Never serialized to clients.
    pub delete_password: String,
    /// Creation timestamp (RFC3339).
    pub created_on: String,
    /// Last bump timestamp (RFC3339). Equal to created_on at creation,
    /// touched by replies and reports, never decreases.
    pub bumped_on: String,
    /// Moderation flag. Never serialized to clients.
    pub reported: bool,
}

/// Data for creating a new thread.
#[derive(Debug, Clone)]
pub struct NewThread {
    /// Name of the board to post on.
    pub board: String,
    /// Thread text.
    pub text: String,
    /// Digest of the delete secret (already hashed by the caller).
    pub delete_password: String,
}

impl NewThread {
    /// Create a new thread with required fields.
    pub fn new(
        board: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            board: board.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}
