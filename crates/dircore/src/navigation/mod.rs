//! Session navigation over the folder tree

pub mod navigator;
pub mod outbound;
pub mod session;

// Re-exports for convenience
pub use navigator::{Navigator, Outcome, Selection};
pub use outbound::Outbound;
pub use session::{store_from_config, BoundedSessionStore, MemorySessionStore, SessionId, SessionStore};
