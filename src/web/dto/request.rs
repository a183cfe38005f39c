//! Request DTOs for the board API.

use serde::Deserialize;

/// Body of POST /api/threads/{board}.
#[derive(Debug, Deserialize)]
pub struct CreateThreadRequest {
    /// Thread text.
    #[serde(default)]
    pub text: String,
    /// Plaintext delete secret, hashed before storage.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of PUT /api/threads/{board}.
///
/// Clients send either `thread_id` or the legacy `report_id` spelling.
#[derive(Debug, Deserialize)]
pub struct ReportThreadRequest {
    /// ID of the thread to report.
    #[serde(alias = "report_id")]
    pub thread_id: String,
}

/// Body of DELETE /api/threads/{board}.
#[derive(Debug, Deserialize)]
pub struct DeleteThreadRequest {
    /// ID of the thread to delete.
    pub thread_id: String,
    /// Plaintext delete secret. An absent secret is a mismatch.
    #[serde(default)]
    pub delete_password: Option<String>,
}

/// Query string of GET /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct ThreadDetailQuery {
    /// ID of the thread to fetch.
    pub thread_id: String,
}

/// Body of POST /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    /// ID of the thread to reply to.
    pub thread_id: String,
    /// Reply text.
    #[serde(default)]
    pub text: String,
    /// Plaintext delete secret, hashed before storage.
    #[serde(default)]
    pub delete_password: String,
}

/// Body of PUT /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct ReportReplyRequest {
    /// ID of the parent thread.
    pub thread_id: String,
    /// ID of the reply to report.
    pub reply_id: String,
}

/// Body of DELETE /api/replies/{board}.
#[derive(Debug, Deserialize)]
pub struct DeleteReplyRequest {
    /// ID of the parent thread.
    pub thread_id: String,
    /// ID of the reply to delete.
    pub reply_id: String,
    /// Plaintext delete secret. An absent secret is a mismatch.
    #[serde(default)]
    pub delete_password: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_thread_accepts_both_spellings() {
        let req: ReportThreadRequest = serde_json::from_str(r#"{"thread_id": "abc"}"#).unwrap();
        assert_eq!(req.thread_id, "abc");

        let req: ReportThreadRequest = serde_json::from_str(r#"{"report_id": "abc"}"#).unwrap();
        assert_eq!(req.thread_id, "abc");
    }

    #[test]
    fn test_create_thread_defaults_missing_fields() {
        let req: CreateThreadRequest = serde_json::from_str("{}").unwrap();
        assert!(req.text.is_empty());
        assert!(req.delete_password.is_empty());
    }

    #[test]
    fn test_delete_thread_secret_is_optional() {
        let req: DeleteThreadRequest = serde_json::from_str(r#"{"thread_id": "abc"}"#).unwrap();
        assert_eq!(req.thread_id, "abc");
        assert!(req.delete_password.is_none());
    }
}
