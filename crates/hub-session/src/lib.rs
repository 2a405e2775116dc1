//! Session, durable storage, and route-guard core for the GameHub client.
//!
//! The [`SessionStore`] is the single source of truth for "who is logged
//! in"; the [`GuardDecision`] gates protected views; [`SessionStorage`]
//! abstracts the durable key/value store the session survives restarts in.

pub mod error;
pub mod guard;
pub mod session_load;
pub mod storage;
pub mod store;

pub use error::{Result, SessionError};
pub use guard::GuardDecision;
pub use session_load::SessionLoad;
pub use storage::{FileStorage, MemoryStorage, SessionStorage};
pub use store::{NewMemberProfile, SESSION_KEY, SessionStore};

#[cfg(test)]
mod tests;
