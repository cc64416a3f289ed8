use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "dirbot")]
#[command(author, version, about = "Telegram bot for browsing a folder tree of text files", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling
    Run,

    /// Create the folder tree on disk (idempotent)
    Build {
        /// Folder to build into (defaults to TREE_ROOT)
        #[arg(short, long)]
        root: Option<PathBuf>,

        /// JSON tree description (defaults to the built-in sample tree)
        #[arg(short, long)]
        description: Option<PathBuf>,
    },

    /// Show how every folder under the root will be displayed
    Inspect {
        /// Folder to inspect (defaults to TREE_ROOT)
        #[arg(short, long)]
        root: Option<PathBuf>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
