//! dircore - folder tree browsing without a transport
//!
//! This library provides everything the bot needs except Telegram itself:
//! building the folder tree on disk, classifying folders, and the
//! per-session navigation state machine.
//!
//! # Module Structure
//!
//! - `core`: configuration, errors, and logging
//! - `tree`: tree descriptions, the builder, listings and the leaf rule
//! - `navigation`: sessions, the outbound capability, and the navigator

pub mod core;
pub mod navigation;
pub mod tree;

// Re-export commonly used types for convenience
pub use crate::core::{config, AppError, AppResult};
pub use navigation::{Navigator, Outbound, Outcome, SessionId, SessionStore};
pub use tree::{build, default_description, load_description, Menu, MenuItem, TreeDescription, TreeNode};
