//! Crate-level error types

use thiserror::Error;

/// Error type for server operations
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (bind, accept, serve)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
