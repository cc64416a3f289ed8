//! Recording outbound double
//!
//! Captures every outbound call per session instead of talking to Telegram,
//! so navigation can be asserted call by call.

use std::sync::Mutex;

use async_trait::async_trait;
use dircore::{AppResult, MenuItem, Outbound, SessionId};

/// One captured outbound call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundCall {
    Menu {
        session: SessionId,
        labels: Vec<String>,
        tokens: Vec<String>,
        replace_prior: bool,
    },
    Text {
        session: SessionId,
        content: String,
        remove_prior: bool,
    },
    Error {
        session: SessionId,
        message: String,
    },
}

#[derive(Default)]
pub struct RecordingOutbound {
    calls: Mutex<Vec<OutboundCall>>,
}

impl RecordingOutbound {
    pub fn new() -> Self {
        Self::default()
    }

    /// All calls recorded so far, oldest first
    pub fn calls(&self) -> Vec<OutboundCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Drains recorded calls
    pub fn take(&self) -> Vec<OutboundCall> {
        std::mem::take(&mut *self.calls.lock().unwrap())
    }

    pub fn last(&self) -> Option<OutboundCall> {
        self.calls.lock().unwrap().last().cloned()
    }

    /// Tokens of the most recent menu shown to `session`
    pub fn last_menu_tokens(&self, session: SessionId) -> Option<Vec<String>> {
        self.calls.lock().unwrap().iter().rev().find_map(|call| match call {
            OutboundCall::Menu { session: s, tokens, .. } if *s == session => Some(tokens.clone()),
            _ => None,
        })
    }
}

#[async_trait]
impl Outbound for RecordingOutbound {
    async fn show_menu(&self, session: SessionId, items: &[MenuItem], replace_prior: bool) -> AppResult<()> {
        self.calls.lock().unwrap().push(OutboundCall::Menu {
            session,
            labels: items.iter().map(|i| i.label.clone()).collect(),
            tokens: items.iter().map(|i| i.token.clone()).collect(),
            replace_prior,
        });
        Ok(())
    }

    async fn show_text(&self, session: SessionId, content: &str, remove_prior: bool) -> AppResult<()> {
        self.calls.lock().unwrap().push(OutboundCall::Text {
            session,
            content: content.to_string(),
            remove_prior,
        });
        Ok(())
    }

    async fn show_error(&self, session: SessionId, message: &str) -> AppResult<()> {
        self.calls.lock().unwrap().push(OutboundCall::Error {
            session,
            message: message.to_string(),
        });
        Ok(())
    }
}
