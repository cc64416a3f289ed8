//! Dispatcher schema and handler chain builders

use std::sync::Arc;

use dircore::{Navigator, Outcome, SessionId};
use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::Message;

use super::bot::Command;
use super::outbound::TelegramOutbound;
use super::Bot;

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub navigator: Arc<Navigator>,
    pub outbound: Arc<TelegramOutbound>,
}

impl HandlerDeps {
    /// Create new handler dependencies
    pub fn new(navigator: Arc<Navigator>, outbound: Arc<TelegramOutbound>) -> Self {
        Self { navigator, outbound }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// Updates of one chat are handled one after another by the dispatcher,
/// so a session never sees two overlapping transitions.
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_callback = deps;

    dptree::entry()
        .branch(command_handler(deps_commands))
        .branch(callback_handler(deps_callback))
}

/// Handler for bot commands (/start)
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("🎯 Received command: {:?} from chat {}", cmd, msg.chat.id);

                match cmd {
                    Command::Start => handle_start_command(&deps, &msg).await,
                }
            }
        },
    ))
}

/// Handler for inline button presses
fn callback_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_callback_query().endpoint(move |bot: Bot, q: CallbackQuery| {
        let deps = deps.clone();
        async move { handle_selection(&bot, &deps, q).await }
    })
}

/// `/start`: show the root of the tree.
pub async fn handle_start_command(deps: &HandlerDeps, msg: &Message) -> Result<(), HandlerError> {
    let session = SessionId(msg.chat.id.0);
    match deps.navigator.enter(session).await {
        Ok(outcome) => log::debug!("Session {} /start -> {:?}", session, outcome),
        Err(e) => log::error!("❌ /start failed for chat {}: {}", msg.chat.id, e),
    }
    Ok(())
}

/// Button press: move the session and show the result.
pub async fn handle_selection(bot: &Bot, deps: &HandlerDeps, q: CallbackQuery) -> Result<(), HandlerError> {
    if let Err(e) = bot.answer_callback_query(q.id.clone()).await {
        log::warn!("Failed to answer callback query: {:?}", e);
    }

    let (Some(message), Some(data)) = (q.message.as_ref(), q.data.as_deref()) else {
        log::debug!("Callback without message or data from user {}", q.from.id);
        return Ok(());
    };

    let chat_id = message.chat().id;
    deps.outbound.track_menu(chat_id, message.id());

    let session = SessionId(chat_id.0);
    match deps.navigator.select(session, data).await {
        Ok(Outcome::Ignored) => log::debug!("Session {}: {:?} ignored", session, data),
        Ok(outcome) => log::debug!("Session {}: {:?} -> {:?}", session, data, outcome),
        Err(e) => log::error!("❌ Navigation failed for chat {} ({:?}): {}", chat_id, data, e),
    }
    Ok(())
}
