//! Registry error types
//!
//! Error types for user registry operations.

use thiserror::Error;

use crate::connection::ConnectionId;

/// Error type for registry operations
///
/// Registry errors are local and recoverable: the coordinator drops the
/// offending event and logs, nothing is reported back to the client.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The connection already has a registered profile
    #[error("Connection already registered: {0}")]
    DuplicateRegistration(ConnectionId),
}
