use anyhow::Result;
use dotenvy::dotenv;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use teloxide::prelude::*;
use tokio::time::sleep;

use dirbot::cli::{Cli, Commands};
use dirbot::telegram::{create_bot, schema, setup_bot_commands, wait_for_bot_api, HandlerDeps, TelegramOutbound};
use dircore::core::{config, init_logger, log_tree_configuration};
use dircore::navigation::store_from_config;
use dircore::tree::{self, NodeKind};
use dircore::Navigator;

/// Main entry point for the bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, tree building, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Route panics through the logger
    std::panic::set_hook(Box::new(|panic_info| {
        log::error!("Panic caught: {:?}", panic_info);
        if let Some(location) = panic_info.location() {
            log::error!("Panic at {}:{}:{}", location.file(), location.line(), location.column());
        }
    }));

    // Load environment variables from .env if present (before config is read)
    let _ = dotenv();

    init_logger(&config::LOG_FILE_PATH)?;

    match cli.command {
        Some(Commands::Run) | None => run_bot().await,
        Some(Commands::Build { root, description }) => run_build(root, description),
        Some(Commands::Inspect { root }) => run_inspect(root),
    }
}

fn tree_root(root: Option<PathBuf>) -> PathBuf {
    root.unwrap_or_else(|| PathBuf::from(config::TREE_ROOT.as_str()))
}

/// Run the tree builder command
fn run_build(root: Option<PathBuf>, description: Option<PathBuf>) -> Result<()> {
    let root = tree_root(root);
    let description = match description {
        Some(path) => {
            log::info!("Loading tree description from {}", path.display());
            tree::load_description(&path)?
        }
        None => tree::default_description(),
    };

    let report = tree::build(&root, &description)?;
    println!(
        "Tree '{}' is ready: {} folder(s), {} file(s)",
        root.display(),
        report.folders,
        report.files
    );
    Ok(())
}

/// Run the inspect command
fn run_inspect(root: Option<PathBuf>) -> Result<()> {
    let root = tree_root(root);
    let report = inspect(&root)?;

    for (path, label) in &report.lines {
        println!("{:<6} {}", label, path);
    }
    if report.dead_ends > 0 {
        println!(
            "{} folder(s) have neither subfolders nor exactly one .txt file",
            report.dead_ends
        );
    }
    for path in &report.shadowed {
        println!(
            "warning: folder {} is named {:?} like the back button and cannot be opened",
            path,
            config::ui::BACK_TOKEN
        );
    }
    Ok(())
}

/// What `inspect` prints, relative to the tree root
#[derive(Debug, Default, PartialEq, Eq)]
struct InspectReport {
    lines: Vec<(String, &'static str)>,
    dead_ends: usize,
    shadowed: Vec<String>,
}

fn inspect(root: &Path) -> Result<InspectReport> {
    let mut report = InspectReport::default();

    for (path, kind) in tree::walk(root)? {
        let label = match kind {
            NodeKind::Branch => "menu",
            NodeKind::Leaf => "text",
            NodeKind::DeadEnd => {
                report.dead_ends += 1;
                "ERROR"
            }
        };
        let relative = display_relative(root, &path);
        if path.as_path() != root && tree::is_back_shadowed(&path) {
            report.shadowed.push(relative.clone());
        }
        report.lines.push((relative, label));
    }
    Ok(report)
}

fn display_relative(root: &Path, path: &Path) -> String {
    match path.strip_prefix(root) {
        Ok(relative) if relative.as_os_str().is_empty() => ".".to_string(),
        Ok(relative) => relative.display().to_string(),
        Err(_) => path.display().to_string(),
    }
}

/// Run the bot with long polling, restarting the dispatcher if it panics
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    let root = PathBuf::from(config::TREE_ROOT.as_str());
    log_tree_configuration(&root);

    let bot = create_bot()?;
    let me = wait_for_bot_api(&bot).await?;
    log::info!("Bot username: {:?}, Bot ID: {}", me.username, me.id);

    setup_bot_commands(&bot).await?;

    let outbound = Arc::new(TelegramOutbound::new(bot.clone()));
    let navigator = Arc::new(Navigator::new(root, store_from_config(), outbound.clone()));
    let handler = schema(HandlerDeps::new(navigator, outbound));

    let mut retry_count = 0;
    let max_retries = config::retry::MAX_DISPATCHER_RETRIES;

    loop {
        let bot_clone = bot.clone();
        let handler_clone = handler.clone();

        let handle = tokio::spawn(async move {
            use teloxide::update_listeners::Polling;

            // Polling listener that drops updates queued while the bot was down
            let listener = Polling::builder(bot_clone.clone()).drop_pending_updates().build();

            Dispatcher::builder(bot_clone, handler_clone)
                .dependencies(DependencyMap::new())
                .enable_ctrlc_handler()
                .build()
                .dispatch_with_listener(
                    listener,
                    LoggingErrorHandler::with_custom_text("An error from the update listener"),
                )
                .await
        });

        match handle.await {
            Ok(()) => {
                log::info!("Dispatcher shutdown gracefully");
                break;
            }
            Err(join_err) if join_err.is_panic() => {
                log::error!("Dispatcher panicked: {}", join_err);
                if retry_count >= max_retries {
                    log::error!("Max retries reached after panic. Exiting...");
                    break;
                }
                retry_count += 1;
                log::info!(
                    "Retrying dispatcher after panic (attempt {}/{})...",
                    retry_count,
                    max_retries
                );
                sleep(config::retry::backoff(retry_count)).await;
            }
            Err(join_err) => {
                log::warn!("Dispatcher task was cancelled: {}", join_err);
                break;
            }
        }

        sleep(config::retry::dispatcher_delay()).await;
    }

    Ok(())
}
