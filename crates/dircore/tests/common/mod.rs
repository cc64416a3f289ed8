//! Common test utilities
//!
//! This module is shared across the dircore integration tests

#![allow(dead_code)]

pub mod fixtures;
pub mod recorder;

#[allow(unused_imports)]
pub use fixtures::{scenario_tree, TestTree};
#[allow(unused_imports)]
pub use recorder::{OutboundCall, RecordingOutbound};
