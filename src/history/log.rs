//! Message log implementation

use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

use super::message::Message;

/// Append-only log of delivered messages
///
/// Appends preserve arrival order. Timestamps are clamped on append so the
/// stored sequence is monotonically non-decreasing even if the wall clock
/// steps backwards between concurrent senders.
pub struct MessageLog {
    inner: Mutex<LogInner>,
}

struct LogInner {
    messages: Vec<Message>,
    last_timestamp: Option<DateTime<Utc>>,
}

impl MessageLog {
    /// Create a new, empty log
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(LogInner {
                messages: Vec::new(),
                last_timestamp: None,
            }),
        }
    }

    /// Append a message, preserving arrival order
    ///
    /// Returns the message as stored (its timestamp may have been clamped to
    /// the previous entry's); the caller broadcasts the returned copy so
    /// clients see exactly what the log holds.
    pub async fn append(&self, mut message: Message) -> Message {
        let mut inner = self.inner.lock().await;

        if let Some(last) = inner.last_timestamp {
            if message.timestamp < last {
                message.timestamp = last;
            }
        }
        inner.last_timestamp = Some(message.timestamp);
        inner.messages.push(message.clone());

        tracing::debug!(
            connection_id = %message.id,
            user_name = %message.user_name,
            total = inner.messages.len(),
            "Message appended"
        );

        message
    }

    /// Take a full ordered copy of the log
    pub async fn snapshot(&self) -> Vec<Message> {
        self.inner.lock().await.messages.clone()
    }

    /// Number of messages in the log
    pub async fn len(&self) -> usize {
        self.inner.lock().await.messages.len()
    }

    /// Whether the log is empty
    pub async fn is_empty(&self) -> bool {
        self.inner.lock().await.messages.is_empty()
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::ConnectionId;
    use chrono::Duration;

    #[tokio::test]
    async fn test_append_preserves_order() {
        let log = MessageLog::new();

        log.append(Message::new(ConnectionId::new(1), "Alice", "first")).await;
        log.append(Message::new(ConnectionId::new(2), "Bob", "second")).await;

        let snapshot = log.snapshot().await;
        assert_eq!(snapshot.len(), 2);
        assert_eq!(snapshot[0].text, "first");
        assert_eq!(snapshot[1].text, "second");
    }

    #[tokio::test]
    async fn test_backwards_timestamp_is_clamped() {
        let log = MessageLog::new();

        let first = Message::new(ConnectionId::new(1), "Alice", "first");
        let first_ts = first.timestamp;
        log.append(first).await;

        let mut stale = Message::new(ConnectionId::new(2), "Bob", "stale clock");
        stale.timestamp = first_ts - Duration::seconds(5);
        let stored = log.append(stale).await;

        assert_eq!(stored.timestamp, first_ts);

        let snapshot = log.snapshot().await;
        assert!(snapshot[0].timestamp <= snapshot[1].timestamp);
    }

    #[tokio::test]
    async fn test_snapshot_is_a_copy() {
        let log = MessageLog::new();
        log.append(Message::new(ConnectionId::new(1), "Alice", "hi")).await;

        let snapshot = log.snapshot().await;
        log.append(Message::new(ConnectionId::new(1), "Alice", "again")).await;

        assert_eq!(snapshot.len(), 1);
        assert_eq!(log.len().await, 2);
    }

    #[tokio::test]
    async fn test_empty_log() {
        let log = MessageLog::new();

        assert!(log.is_empty().await);
        assert!(log.snapshot().await.is_empty());
    }
}
