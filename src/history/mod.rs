//! Message history
//!
//! An append-only, ordered sequence of every delivered message, kept for the
//! lifetime of the process so late snapshot queries can replay the
//! conversation. There is no eviction: a bounded-lifetime chat session is the
//! intended deployment.

pub mod log;
pub mod message;

pub use log::MessageLog;
pub use message::Message;
