//! HTTP cache revalidation module
//!
//! `ETag` generation and `If-None-Match` handling. Clip files never
//! change while the process runs, so a content hash is a stable
//! validator and lets browsers replay videos from cache.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Generate a quoted `ETag` from file content, e.g. `"9f3bc1a"`
pub fn generate_etag(content: &[u8]) -> String {
    let mut hasher = DefaultHasher::new();
    content.hash(&mut hasher);
    let v = hasher.finish();
    format!("\"{v:x}\"")
}

/// Check whether the client's `If-None-Match` header matches our `ETag`.
///
/// Handles a single tag, a comma-separated list, and the `*` wildcard.
/// A match means the client copy is current and a 304 should be sent.
pub fn check_etag_match(if_none_match: Option<&str>, etag: &str) -> bool {
    if_none_match.is_some_and(|client_etag| {
        client_etag
            .split(',')
            .any(|e| e.trim() == etag || e.trim() == "*")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_etag_is_quoted() {
        let etag = generate_etag(b"clip bytes");
        assert!(etag.starts_with('"'));
        assert!(etag.ends_with('"'));
        assert!(etag.len() > 2);
    }

    #[test]
    fn test_etag_stable_for_same_content() {
        assert_eq!(generate_etag(b"same clip"), generate_etag(b"same clip"));
    }

    #[test]
    fn test_etag_differs_for_different_content() {
        assert_ne!(generate_etag(b"clip a"), generate_etag(b"clip b"));
    }

    #[test]
    fn test_if_none_match_handling() {
        let etag = "\"abc123\"";
        assert!(check_etag_match(Some("\"abc123\""), etag));
        assert!(check_etag_match(Some("\"other\", \"abc123\""), etag));
        assert!(check_etag_match(Some("*"), etag));
        assert!(!check_etag_match(Some("\"different\""), etag));
        assert!(!check_etag_match(None, etag));
    }
}
