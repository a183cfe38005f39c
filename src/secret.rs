//! Delete-secret hashing for threads and replies.
//!
//! Every thread and reply stores a digest of the secret chosen at creation
//! time; presenting the same secret later is the only way to delete the
//! entity. The digest is deterministic and one-way, immutable after
//! creation, and never serialized to clients.

use sha2::{Digest, Sha256};

/// Hash a plaintext delete secret into its stored digest form.
///
/// SHA-256 over the UTF-8 bytes of the plaintext, as a lowercase hex string.
pub fn hash(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Check a submitted plaintext secret against a stored digest.
///
/// Callers holding an *absent* secret must treat it as a mismatch directly
/// instead of hashing empty input.
pub fn verify(plaintext: &str, stored_digest: &str) -> bool {
    hash(plaintext) == stored_digest
}
