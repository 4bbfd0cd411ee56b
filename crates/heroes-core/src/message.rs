//! In-memory message log.
//!
//! An ordered, append-only trail of human-readable outcome descriptions,
//! shown to users as on-screen diagnostics. Only `clear` removes entries.

use std::sync::Arc;
use tokio::sync::RwLock;

/// Shared handle to the process-wide message log.
///
/// Cloning the handle shares the underlying storage, so every collaborator
/// constructed with a clone appends to the same sequence. Entries appear in
/// the order the `add` calls complete.
#[derive(Debug, Clone, Default)]
pub struct MessageLog {
    messages: Arc<RwLock<Vec<String>>>,
}

impl MessageLog {
    /// Creates a new empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a message to the end of the log.
    ///
    /// No size bound and no deduplication.
    pub async fn add(&self, message: impl Into<String>) {
        let message = message.into();
        tracing::trace!(%message, "message log append");
        let mut messages = self.messages.write().await;
        messages.push(message);
    }

    /// Removes every entry.
    pub async fn clear(&self) {
        let mut messages = self.messages.write().await;
        messages.clear();
    }

    /// Returns a snapshot of the entries, oldest first.
    pub async fn messages(&self) -> Vec<String> {
        let messages = self.messages.read().await;
        messages.clone()
    }

    pub async fn len(&self) -> usize {
        self.messages.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.messages.read().await.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_add_preserves_order() {
        let log = MessageLog::new();
        log.add("first").await;
        log.add("second").await;
        log.add("first").await;

        assert_eq!(log.messages().await, vec!["first", "second", "first"]);
        assert_eq!(log.len().await, 3);
    }

    #[tokio::test]
    async fn test_clear_empties_log() {
        let log = MessageLog::new();
        log.add("one").await;
        log.add("two").await;

        log.clear().await;

        assert!(log.is_empty().await);
        assert!(log.messages().await.is_empty());
    }

    #[tokio::test]
    async fn test_clones_share_storage() {
        let log = MessageLog::new();
        let other = log.clone();

        other.add("from clone").await;

        assert_eq!(log.messages().await, vec!["from clone"]);
        log.clear().await;
        assert!(other.is_empty().await);
    }

    #[tokio::test]
    async fn test_snapshot_is_detached() {
        let log = MessageLog::new();
        log.add("kept").await;
        let snapshot = log.messages().await;

        log.clear().await;

        assert_eq!(snapshot, vec!["kept"]);
    }
}
