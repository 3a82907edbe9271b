//! Session lifecycle and event coordination
//!
//! Each connection owns a [`SessionState`] that walks the
//! `Connected → Registered → Closed` state machine. The shared
//! [`Coordinator`] is the single place where client events turn into registry
//! and history mutations plus broadcast fan-out, in that order.

pub mod coordinator;
pub mod state;

pub use coordinator::Coordinator;
pub use state::{SessionPhase, SessionState};
