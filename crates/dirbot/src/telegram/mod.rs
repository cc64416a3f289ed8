//! Telegram bot integration and handlers

pub mod bot;
pub mod keyboard;
pub mod outbound;
pub mod schema;

pub use teloxide::Bot;

// Re-exports for convenience
pub use bot::{create_bot, setup_bot_commands, wait_for_bot_api, Command};
pub use outbound::TelegramOutbound;
pub use schema::{handle_selection, handle_start_command, schema, HandlerDeps, HandlerError};
