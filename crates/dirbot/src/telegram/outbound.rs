//! Telegram implementation of the navigator's outbound capability
//!
//! Keeps track of the menu message currently shown in each chat so a new
//! menu can edit it in place and a file view can delete it. The menu is only
//! deleted once the file text has been delivered.

use async_trait::async_trait;
use dashmap::DashMap;
use dircore::config::ui;
use dircore::{AppResult, MenuItem, Outbound, SessionId};
use teloxide::prelude::*;
use teloxide::types::MessageId;
use teloxide::{ApiError, RequestError};

use super::keyboard::menu_keyboard;
use super::Bot;

/// Telegram's limit on message text, in UTF-16 code units
pub const MAX_MESSAGE_LENGTH: usize = 4096;

pub struct TelegramOutbound {
    bot: Bot,
    menus: DashMap<ChatId, MessageId>,
}

impl TelegramOutbound {
    pub fn new(bot: Bot) -> Self {
        Self {
            bot,
            menus: DashMap::new(),
        }
    }

    /// Marks `message_id` as the chat's current menu (the one whose button was pressed).
    pub fn track_menu(&self, chat_id: ChatId, message_id: MessageId) {
        self.menus.insert(chat_id, message_id);
    }

    pub fn tracked_menu(&self, chat_id: ChatId) -> Option<MessageId> {
        self.menus.get(&chat_id).map(|entry| *entry.value())
    }

    async fn send_menu(&self, chat_id: ChatId, items: &[MenuItem]) -> AppResult<()> {
        let sent = self
            .bot
            .send_message(chat_id, ui::MENU_PROMPT)
            .reply_markup(menu_keyboard(items))
            .await?;
        self.track_menu(chat_id, sent.id);
        Ok(())
    }
}

pub(crate) fn chat_of(session: SessionId) -> ChatId {
    ChatId(session.0)
}

/// Splits file text into messages Telegram accepts.
///
/// Each part stays within [`MAX_MESSAGE_LENGTH`] UTF-16 units and is cut
/// after the last newline that fits, if any. Blank text becomes a single
/// placeholder since Telegram refuses empty messages.
pub fn message_parts(text: &str) -> Vec<String> {
    if text.trim().is_empty() {
        return vec![ui::EMPTY_FILE_MESSAGE.to_string()];
    }

    let mut parts = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        let mut units = 0;
        let mut end = rest.len();
        let mut after_newline = None;
        for (idx, ch) in rest.char_indices() {
            units += ch.len_utf16();
            if units > MAX_MESSAGE_LENGTH {
                end = after_newline.unwrap_or(idx);
                break;
            }
            if ch == '\n' {
                after_newline = Some(idx + 1);
            }
        }

        let (part, tail) = rest.split_at(end);
        if !part.trim().is_empty() {
            parts.push(part.to_string());
        }
        rest = tail;
    }
    parts
}

#[async_trait]
impl Outbound for TelegramOutbound {
    async fn show_menu(&self, session: SessionId, items: &[MenuItem], replace_prior: bool) -> AppResult<()> {
        let chat_id = chat_of(session);

        let prior = if replace_prior { self.tracked_menu(chat_id) } else { None };
        let Some(message_id) = prior else {
            return self.send_menu(chat_id, items).await;
        };

        match self
            .bot
            .edit_message_text(chat_id, message_id, ui::MENU_PROMPT)
            .reply_markup(menu_keyboard(items))
            .await
        {
            Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    async fn show_text(&self, session: SessionId, content: &str, remove_prior: bool) -> AppResult<()> {
        let chat_id = chat_of(session);

        for part in message_parts(content) {
            self.bot.send_message(chat_id, part).await?;
        }

        if remove_prior {
            if let Some((_, message_id)) = self.menus.remove(&chat_id) {
                if let Err(e) = self.bot.delete_message(chat_id, message_id).await {
                    log::warn!("Failed to delete menu message in chat {}: {:?}", chat_id, e);
                }
            }
        }
        Ok(())
    }

    async fn show_error(&self, session: SessionId, message: &str) -> AppResult<()> {
        self.bot.send_message(chat_of(session), message).await?;
        Ok(())
    }
}
