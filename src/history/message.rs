//! Chat message type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::connection::ConnectionId;

/// A single delivered chat message
///
/// Immutable once created. Serializes camelCase with an ISO-8601 timestamp,
/// matching the wire payload of the `receiveMessage` event:
/// `{id, userName, text, timestamp}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// The sender's connection id
    pub id: ConnectionId,

    /// The sender's display name at send time
    pub user_name: String,

    /// Message text
    pub text: String,

    /// Receipt time, assigned by the coordinator
    pub timestamp: DateTime<Utc>,
}

impl Message {
    /// Create a message stamped with the current time
    pub fn new(id: ConnectionId, user_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id,
            user_name: user_name.into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape() {
        let message = Message::new(ConnectionId::new(1), "Alice", "hi");
        let json: serde_json::Value = serde_json::to_value(&message).unwrap();

        assert_eq!(json["id"], 1);
        assert_eq!(json["userName"], "Alice");
        assert_eq!(json["text"], "hi");

        // RFC 3339 / ISO-8601 timestamp string
        let ts = json["timestamp"].as_str().unwrap();
        assert!(DateTime::parse_from_rfc3339(ts).is_ok());
    }
}
