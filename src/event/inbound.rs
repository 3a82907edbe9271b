//! Events received from clients

use serde::{Deserialize, Serialize};

/// An event sent by a client over its connection
///
/// Connection open/close/error are not wire events; they come from the
/// transport layer itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ClientEvent {
    /// Associate a display name with this connection
    Register {
        /// Requested display name
        name: String,
    },

    /// Send a chat message to everyone
    SendMessage {
        /// Message text
        text: String,
    },
}
