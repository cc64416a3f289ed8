//! dirbot - Telegram front end for browsing a folder tree
//!
//! # Module Structure
//!
//! - `cli`: command line interface
//! - `telegram`: bot setup, dispatcher schema, and the Telegram outbound

pub mod cli;
pub mod telegram;
