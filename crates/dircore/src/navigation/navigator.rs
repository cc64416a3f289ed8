//! Folder navigation state machine.
//!
//! Each session sits in one directory under the root. `/start` puts it at the
//! root; button presses move it into a subfolder or back to the parent.
//! Leaf folders show their text file, dead ends show an error and leave the
//! session where it was.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use super::outbound::Outbound;
use super::session::{SessionId, SessionStore};
use crate::core::config::ui;
use crate::core::error::AppResult;
use crate::tree::{self, is_plain_component, Screen};

/// A decoded button press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Back,
    Folder(&'a str),
}

impl<'a> Selection<'a> {
    pub fn parse(token: &'a str) -> Self {
        if token == ui::BACK_TOKEN {
            Selection::Back
        } else {
            Selection::Folder(token)
        }
    }
}

/// What a navigation event produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// A menu was shown
    Menu,
    /// A file's text was shown
    Text,
    /// An error message was shown
    Error,
    /// Nothing was sent (back at root, unknown folder)
    Ignored,
}

pub struct Navigator {
    root: PathBuf,
    sessions: Arc<dyn SessionStore>,
    outbound: Arc<dyn Outbound>,
}

impl Navigator {
    pub fn new(root: impl Into<PathBuf>, sessions: Arc<dyn SessionStore>, outbound: Arc<dyn Outbound>) -> Self {
        Self {
            root: root.into(),
            sessions,
            outbound,
        }
    }

    /// Current directory of `session`; the root for sessions never seen.
    pub fn current_path(&self, session: SessionId) -> PathBuf {
        self.sessions.get(session).unwrap_or_else(|| self.root.clone())
    }

    /// Handles `/start`: moves the session to the root and shows what is there.
    pub async fn enter(&self, session: SessionId) -> AppResult<Outcome> {
        self.sessions.set(session, self.root.clone());
        log::info!("Session {} entered {}", session, self.root.display());

        match tree::screen(&self.root, &self.root) {
            Ok(Screen::Menu(menu)) => {
                self.outbound.show_menu(session, &menu.items, false).await?;
                Ok(Outcome::Menu)
            }
            Ok(Screen::Leaf { content, .. }) => {
                self.outbound.show_text(session, &content, false).await?;
                Ok(Outcome::Text)
            }
            Ok(Screen::DeadEnd { text_files }) => {
                log::warn!(
                    "Root {} is a dead end ({} text file(s), no folders)",
                    self.root.display(),
                    text_files
                );
                self.report_error(session).await
            }
            Err(e) => {
                log::error!("Failed to read root {}: {}", self.root.display(), e);
                self.report_error(session).await
            }
        }
    }

    /// Handles a button press carrying `token`.
    ///
    /// The session path only changes once the target folder has been shown
    /// as a menu or a file. Invalid targets and back-at-root are ignored.
    pub async fn select(&self, session: SessionId, token: &str) -> AppResult<Outcome> {
        let current = self.current_path(session);

        let Some(target) = self.resolve(&current, Selection::parse(token)) else {
            log::debug!("Session {}: ignoring {:?} at {}", session, token, current.display());
            return Ok(Outcome::Ignored);
        };

        match tree::screen(&self.root, &target) {
            Ok(Screen::Menu(menu)) => {
                self.outbound.show_menu(session, &menu.items, true).await?;
                self.sessions.set(session, target);
                Ok(Outcome::Menu)
            }
            Ok(Screen::Leaf { file, content }) => {
                log::info!("Session {}: showing {}", session, file.display());
                self.outbound.show_text(session, &content, true).await?;
                self.sessions.set(session, target);
                Ok(Outcome::Text)
            }
            Ok(Screen::DeadEnd { text_files }) => {
                log::warn!(
                    "Session {}: {} is a dead end ({} text file(s), no folders)",
                    session,
                    target.display(),
                    text_files
                );
                self.report_error(session).await
            }
            Err(e) => {
                log::error!("Session {}: failed to read {}: {}", session, target.display(), e);
                self.report_error(session).await
            }
        }
    }

    fn resolve(&self, current: &Path, selection: Selection<'_>) -> Option<PathBuf> {
        match selection {
            Selection::Back => {
                if current == self.root {
                    return None;
                }
                current.parent().map(Path::to_path_buf)
            }
            Selection::Folder(name) => {
                if !is_plain_component(name) {
                    log::warn!("Rejected folder token {:?}", name);
                    return None;
                }
                let target = current.join(name);
                target.is_dir().then_some(target)
            }
        }
    }

    async fn report_error(&self, session: SessionId) -> AppResult<Outcome> {
        self.outbound.show_error(session, ui::DEAD_END_MESSAGE).await?;
        Ok(Outcome::Error)
    }
}
