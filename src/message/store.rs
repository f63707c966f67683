//! Message store module
//!
//! Append-only in-memory log of every accepted submission. Records live
//! for the lifetime of the process and are reset only by a restart.

use tokio::sync::RwLock;

use super::types::{AslMatch, MessageRecord};

/// Insertion-ordered log of received messages
///
/// The record vector is guarded by an async `RwLock` because the tokio
/// multi-threaded runtime serves requests in parallel. A `list_all`
/// racing an `append` observes the new record either fully or not at all.
pub struct MessageStore {
    records: RwLock<Vec<MessageRecord>>,
}

impl MessageStore {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(Vec::new()),
        }
    }

    /// Append a record at the end of the log. Never fails, never
    /// deduplicates.
    pub async fn append(&self, text: String, asl: Vec<AslMatch>) {
        let mut records = self.records.write().await;
        records.push(MessageRecord { text, asl });
    }

    /// Snapshot of the full log in insertion order.
    pub async fn list_all(&self) -> Vec<MessageRecord> {
        let records = self.records.read().await;
        records.clone()
    }

    /// Number of stored records.
    pub async fn len(&self) -> usize {
        let records = self.records.read().await;
        records.len()
    }
}

impl Default for MessageStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn match_for(word: &str) -> AslMatch {
        AslMatch {
            word: word.to_string(),
            video: format!("/static/{word}.mp4"),
        }
    }

    #[tokio::test]
    async fn test_append_then_list_includes_record_last() {
        let store = MessageStore::new();
        store.append("first".to_string(), Vec::new()).await;
        store
            .append("hello".to_string(), vec![match_for("hello")])
            .await;

        let records = store.list_all().await;
        assert_eq!(records.len(), 2);
        assert_eq!(records.last().unwrap().text, "hello");
        assert_eq!(records.last().unwrap().asl, vec![match_for("hello")]);
    }

    #[tokio::test]
    async fn test_insertion_order_preserved() {
        let store = MessageStore::new();
        for text in ["a", "b", "c"] {
            store.append(text.to_string(), Vec::new()).await;
        }

        let texts: Vec<String> = store
            .list_all()
            .await
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_duplicates_are_kept() {
        let store = MessageStore::new();
        store.append("same".to_string(), Vec::new()).await;
        store.append("same".to_string(), Vec::new()).await;
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_list_is_a_snapshot() {
        let store = MessageStore::new();
        store.append("one".to_string(), Vec::new()).await;

        let snapshot = store.list_all().await;
        store.append("two".to_string(), Vec::new()).await;

        // The earlier snapshot is unaffected by the later append
        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_repeated_list_is_idempotent() {
        let store = MessageStore::new();
        store
            .append("hello".to_string(), vec![match_for("hello")])
            .await;

        let first = store.list_all().await;
        let second = store.list_all().await;
        assert_eq!(first, second);
    }
}
