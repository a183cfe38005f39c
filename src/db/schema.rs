//! Database schema and migrations for anonboard.
//!
//! This module contains all database migrations that will be applied
//! sequentially when the database is first opened or upgraded.

/// Database migrations.
///
/// Each migration is a SQL script that will be executed in order.
/// The schema_version table tracks which migrations have been applied.
pub const MIGRATIONS: &[&str] = &[
    // v1: Threads table. Boards are implicit: a thread carries its board name
    // and a board springs into existence with its first thread.
    r#"
CREATE TABLE threads (
    id              TEXT PRIMARY KEY,
    board           TEXT NOT NULL,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,       -- SHA-256 digest of the delete secret
    created_on      TEXT NOT NULL,
    bumped_on       TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_threads_board ON threads(board);
CREATE INDEX idx_threads_bumped_on ON threads(bumped_on);
"#,
    // v2: Replies table, cascading with their parent thread
    r#"
CREATE TABLE replies (
    id              TEXT PRIMARY KEY,
    thread_id       TEXT NOT NULL REFERENCES threads(id) ON DELETE CASCADE,
    text            TEXT NOT NULL,
    delete_password TEXT NOT NULL,       -- SHA-256 digest of the delete secret
    created_on      TEXT NOT NULL,
    reported        INTEGER NOT NULL DEFAULT 0
);

CREATE INDEX idx_replies_thread_id ON replies(thread_id);
CREATE INDEX idx_replies_created_on ON replies(created_on);
"#,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_migrations_are_present() {
        assert!(!MIGRATIONS.is_empty());
        assert!(MIGRATIONS[0].contains("CREATE TABLE threads"));
        assert!(MIGRATIONS[1].contains("CREATE TABLE replies"));
    }
}
