//! User registry implementation
//!
//! The central registry that tracks every registered user and hands out
//! point-in-time presence snapshots.

use std::collections::HashMap;

use tokio::sync::RwLock;

use crate::connection::ConnectionId;

use super::error::RegistryError;
use super::profile::UserProfile;

/// Central registry for all registered users
///
/// Thread-safe via `RwLock`. Read-heavy workloads (presence snapshots for
/// broadcasts and queries) benefit from the concurrent read access.
pub struct UserRegistry {
    /// Map of connection id to user profile
    users: RwLock<HashMap<ConnectionId, UserProfile>>,
}

impl UserRegistry {
    /// Create a new, empty registry
    pub fn new() -> Self {
        Self {
            users: RwLock::new(HashMap::new()),
        }
    }

    /// Register a display name for a connection
    ///
    /// Returns the new profile on success. A second register on the same
    /// connection is rejected, not merged. Display names are not required to
    /// be unique across users.
    pub async fn register(
        &self,
        id: ConnectionId,
        name: impl Into<String>,
    ) -> Result<UserProfile, RegistryError> {
        let mut users = self.users.write().await;

        if users.contains_key(&id) {
            return Err(RegistryError::DuplicateRegistration(id));
        }

        let profile = UserProfile::new(id, name);
        users.insert(id, profile.clone());

        tracing::info!(
            connection_id = %id,
            name = %profile.name,
            online = users.len(),
            "User registered"
        );

        Ok(profile)
    }

    /// Remove a connection's registration
    ///
    /// Returns the removed profile, or `None` if the connection was never
    /// registered (disconnect-before-register is a valid, silent no-op).
    pub async fn unregister(&self, id: ConnectionId) -> Option<UserProfile> {
        let mut users = self.users.write().await;

        let profile = users.remove(&id);

        if let Some(ref profile) = profile {
            tracing::info!(
                connection_id = %id,
                name = %profile.name,
                online = users.len(),
                "User unregistered"
            );
        }

        profile
    }

    /// Look up the profile registered for a connection
    pub async fn get(&self, id: ConnectionId) -> Option<UserProfile> {
        self.users.read().await.get(&id).cloned()
    }

    /// Take a point-in-time copy of the current presence
    ///
    /// Sorted by connection id, which equals registration order since ids are
    /// allocated monotonically. Callers never observe a mutation mid-iteration.
    pub async fn snapshot(&self) -> Vec<UserProfile> {
        let users = self.users.read().await;

        let mut profiles: Vec<UserProfile> = users.values().cloned().collect();
        profiles.sort_by_key(|p| p.id);
        profiles
    }

    /// Number of registered users
    pub async fn len(&self) -> usize {
        self.users.read().await.len()
    }

    /// Whether no users are registered
    pub async fn is_empty(&self) -> bool {
        self.users.read().await.is_empty()
    }
}

impl Default for UserRegistry {
    fn default() -> Self {
        Self::new()
    }
}
