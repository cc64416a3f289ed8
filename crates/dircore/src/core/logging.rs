//! Logging initialization and configuration checking
//!
//! This module provides:
//! - Logger initialization (console + file)
//! - Tree root validation and logging
//! - Startup diagnostics

use anyhow::Result;
use simplelog::*;
use std::path::{Path, PathBuf};

use crate::core::config::ui;
use crate::tree::{self, Screen};

/// Initialize logger for both console and file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Failed to initialize logger
pub fn init_logger(log_file_path: &str) -> Result<()> {
    let log_file =
        fs_err::File::create(log_file_path).map_err(|e| anyhow::anyhow!("Failed to create log file: {}", e))?;

    CombinedLogger::init(vec![
        TermLogger::new(
            LevelFilter::Info,
            Config::default(),
            TerminalMode::Mixed,
            ColorChoice::Auto,
        ),
        WriteLogger::new(LevelFilter::Info, Config::default(), log_file),
    ])
    .map_err(|e| anyhow::anyhow!("Failed to initialize logger: {}", e))?;

    Ok(())
}

/// Logs the tree root configuration at application startup
///
/// Validates and logs:
/// - TREE_ROOT existence and canonical path
/// - What the root will display on /start
/// - Folders that cannot be opened because they are named like the back button
/// - Guidance when the tree has not been built yet
///
/// Returns `true` when the root is a readable directory.
pub fn log_tree_configuration(root: &Path) -> bool {
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    log::info!("📁 Tree Configuration Check");
    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    if !root.is_dir() {
        log::error!("❌ TREE_ROOT: {} (DIRECTORY NOT FOUND!)", root.display());
        log::error!("   Current directory: {:?}", std::env::current_dir());
        log::error!("   Every /start will answer with an error until the tree exists.");
        log::error!("");
        log::error!("💡 Quick fix:");
        log::error!("  1. Run: dirbot build --root {}", root.display());
        log::error!("  2. Or set TREE_ROOT to an existing folder");
        log::error!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        return false;
    }

    match root.canonicalize() {
        Ok(abs_path) => log::info!("✅ TREE_ROOT: {}", abs_path.display()),
        Err(e) => log::warn!("⚠️  TREE_ROOT: {} (exists but cannot canonicalize: {})", root.display(), e),
    }

    match tree::screen(root, root) {
        Ok(Screen::Menu(menu)) => {
            log::info!("   Root menu has {} folder(s)", menu.items.len());
            if menu.items.is_empty() {
                log::warn!("⚠️  Root menu is empty - users will see no buttons");
            }
        }
        Ok(Screen::Leaf { file, .. }) => {
            log::info!("   Root is a leaf - /start will show {}", file.display());
        }
        Ok(Screen::DeadEnd { text_files }) => {
            log::warn!(
                "⚠️  Root has no folders and {} text file(s) - /start will show an error",
                text_files
            );
        }
        Err(e) => {
            log::error!("❌ Failed to read TREE_ROOT: {}", e);
            return false;
        }
    }

    let shadowed = back_shadowed_folders(root);
    for path in &shadowed {
        log::warn!(
            "⚠️  Folder {} is named {:?} like the back button - pressing it goes back instead",
            path.display(),
            ui::BACK_TOKEN
        );
    }

    log::info!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    true
}

/// Folders below `root` that can never be opened because of their name.
pub fn back_shadowed_folders(root: &Path) -> Vec<PathBuf> {
    match tree::walk(root) {
        Ok(entries) => entries
            .into_iter()
            .map(|(path, _)| path)
            .filter(|path| path.as_path() != root && tree::is_back_shadowed(path))
            .collect(),
        Err(e) => {
            log::warn!("Failed to walk {}: {}", root.display(), e);
            Vec::new()
        }
    }
}
