//! Connection identifiers

use serde::{Deserialize, Serialize};

/// Opaque identifier for one live connection
///
/// Allocated from a process-wide monotonic counter, so a new connection never
/// reuses a closed connection's id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ConnectionId(u64);

impl ConnectionId {
    /// Create a connection id from a raw counter value
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Get the raw id value
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for ConnectionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ConnectionId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(ConnectionId::new(42).to_string(), "42");
    }

    #[test]
    fn test_ordering_follows_allocation() {
        assert!(ConnectionId::new(1) < ConnectionId::new(2));
    }

    #[test]
    fn test_serializes_as_plain_number() {
        let json = serde_json::to_string(&ConnectionId::new(7)).unwrap();
        assert_eq!(json, "7");
    }
}
