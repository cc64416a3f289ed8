//! Outbound messaging capability consumed by the navigator.
//!
//! The navigator has zero transport dependency: it only calls this trait.
//! The Telegram implementation lives in the bot crate; tests use a recorder.

use async_trait::async_trait;

use super::session::SessionId;
use crate::core::error::AppResult;
use crate::tree::MenuItem;

/// What a session gets to see.
///
/// Each navigation event makes at most one call. Implementations report
/// delivery failures as errors and do not retry.
#[async_trait]
pub trait Outbound: Send + Sync {
    /// Show a folder menu. With `replace_prior`, the session's current menu
    /// message is replaced instead of a new message being sent.
    async fn show_menu(&self, session: SessionId, items: &[MenuItem], replace_prior: bool) -> AppResult<()>;

    /// Show a file's content as a freestanding message. With `remove_prior`,
    /// the menu message that led here is removed.
    async fn show_text(&self, session: SessionId, content: &str, remove_prior: bool) -> AppResult<()>;

    /// Show an error message; the current menu stays as it is.
    async fn show_error(&self, session: SessionId, message: &str) -> AppResult<()>;
}
