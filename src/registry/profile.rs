//! User profile types
//!
//! This module defines the per-user state stored in the registry.

use serde::{Deserialize, Serialize};

use crate::connection::ConnectionId;

/// Profile for a single registered user
///
/// Exactly one exists per live, registered connection. Created on successful
/// `register`, destroyed on disconnect, owned exclusively by the registry.
/// Serializes as `{id, name}` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// The owning connection's id
    pub id: ConnectionId,

    /// Display name chosen at registration
    ///
    /// Not unique: two users may register the same name.
    pub name: String,
}

impl UserProfile {
    /// Create a new profile
    pub fn new(id: ConnectionId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }
}
