//! User registry for presence tracking
//!
//! The registry is the single source of truth for "who is online": a mapping
//! from connection id to user profile, mutated only by the session
//! coordinator.
//!
//! # Architecture
//!
//! ```text
//!                     Arc<UserRegistry>
//!                ┌───────────────────────────┐
//!                │ users: HashMap<           │
//!                │   ConnectionId,           │
//!                │   UserProfile {id, name}  │
//!                │ >                         │
//!                └────────────┬──────────────┘
//!                             │
//!        ┌────────────────────┼────────────────────┐
//!        │                    │                    │
//!        ▼                    ▼                    ▼
//!   register()           unregister()          snapshot()
//!   (on register)        (on disconnect)       (broadcasts, queries)
//! ```
//!
//! Every key corresponds to a currently-open connection. A connection that has
//! not registered has no entry and is not "present".

pub mod error;
pub mod profile;
pub mod store;

pub use error::RegistryError;
pub use profile::UserProfile;
pub use store::UserRegistry;
