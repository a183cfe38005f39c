//! Reply model for anonboard.

/// Reply entity: a child post attached to a thread.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Reply {
    /// Opaque unique reply ID.
    pub id: String,
    /// ID of the parent thread.
    pub thread_id: String,
    /// Reply text.
    pub text: String,
    /// Digest of the delete secret. Never serialized to clients.
    pub delete_password: String,
    /// Creation timestamp (RFC3339).
    pub created_on: String,
    /// Moderation flag. Never serialized to clients.
    pub reported: bool,
}

/// Data for creating a new reply.
#[derive(Debug, Clone)]
pub struct NewReply {
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply text.
    pub text: String,
    /// Digest of the delete secret (already hashed by the caller).
    pub delete_password: String,
}

impl NewReply {
    /// Create a new reply with required fields.
    pub fn new(
        thread_id: impl Into<String>,
        text: impl Into<String>,
        delete_password: impl Into<String>,
    ) -> Self {
        Self {
            thread_id: thread_id.into(),
            text: text.into(),
            delete_password: delete_password.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_reply() {
        let reply = NewReply::new("thread-1", "me too", "digest");
        assert_eq!(reply.thread_id, "thread-1");
        assert_eq!(reply.text, "me too");
        assert_eq!(reply.delete_password, "digest");
    }
}
