//! Events broadcast to clients

use serde::{Deserialize, Serialize};

use crate::history::Message;
use crate::registry::UserProfile;

/// An event fanned out to every known connection
///
/// Event names follow the wire protocol: the message broadcast is
/// `receiveMessage` on the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "data", rename_all = "camelCase")]
pub enum ServerEvent {
    /// Full presence snapshot, sent after every join and leave
    UserList {
        /// Currently registered users
        users: Vec<UserProfile>,
    },

    /// A user registered
    UserJoined {
        /// Human-readable join notice
        message: String,
        /// The new user's profile
        user: UserProfile,
    },

    /// A chat message was relayed
    #[serde(rename = "receiveMessage")]
    MessageReceived(Message),

    /// A registered user disconnected
    UserLeft {
        /// Human-readable leave notice
        message: String,
        /// The departed user's profile
        user: UserProfile,
    },
}

impl ServerEvent {
    /// Build a presence snapshot event
    pub fn user_list(users: Vec<UserProfile>) -> Self {
        ServerEvent::UserList { users }
    }

    /// Build a join notice for a newly registered user
    pub fn user_joined(user: UserProfile) -> Self {
        ServerEvent::UserJoined {
            message: format!("{} joined the chat", user.name),
            user,
        }
    }

    /// Build a leave notice for a departed user
    pub fn user_left(user: UserProfile) -> Self {
        ServerEvent::UserLeft {
            message: format!("{} left the chat", user.name),
            user,
        }
    }
}
