//! Inline keyboard rendering for folder menus

use dircore::MenuItem;
use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup};

/// Telegram rejects callback data longer than this many bytes
pub const MAX_CALLBACK_DATA_LEN: usize = 64;

/// One button per row, in menu order.
pub fn menu_keyboard(items: &[MenuItem]) -> InlineKeyboardMarkup {
    for item in items.iter().filter(|item| item.token.len() > MAX_CALLBACK_DATA_LEN) {
        log::warn!(
            "Folder name {:?} is {} bytes, over the {}-byte callback limit; its button will be rejected",
            item.token,
            item.token.len(),
            MAX_CALLBACK_DATA_LEN
        );
    }

    InlineKeyboardMarkup::new(
        items
            .iter()
            .map(|item| vec![InlineKeyboardButton::callback(item.label.clone(), item.token.clone())]),
    )
}
