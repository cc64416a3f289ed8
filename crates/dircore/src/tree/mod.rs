//! Folder tree: description, builder, and on-disk classification
//!
//! - `TreeDescription`: nested name → folder/file mapping consumed by the builder
//! - `builder`: materializes a description on disk
//! - `listing`: reads a directory and applies the leaf rule
//! - `menu`: menu items shown for a branch directory

pub mod builder;
pub mod listing;
pub mod menu;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::core::error::AppResult;

pub use builder::{build, BuildReport};
pub use listing::{is_back_shadowed, list_dir, screen, walk, Listing, NodeKind, Screen};
pub use menu::{Menu, MenuItem};

/// Nested mapping from entry name to a folder or a file's text.
pub type TreeDescription = BTreeMap<String, TreeNode>;

/// One entry of a [`TreeDescription`].
///
/// Deserializes untagged: a JSON string is a file, a JSON object is a folder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    File(String),
    Folder(TreeDescription),
}

impl TreeNode {
    pub fn file(content: impl Into<String>) -> Self {
        TreeNode::File(content.into())
    }

    pub fn folder<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, TreeNode)>,
        S: Into<String>,
    {
        TreeNode::Folder(description(entries))
    }
}

/// Builds a [`TreeDescription`] from `(name, node)` pairs.
pub fn description<I, S>(entries: I) -> TreeDescription
where
    I: IntoIterator<Item = (S, TreeNode)>,
    S: Into<String>,
{
    entries.into_iter().map(|(name, node)| (name.into(), node)).collect()
}

/// The sample tree shipped with the bot.
pub fn default_description() -> TreeDescription {
    description([
        (
            "Папка1",
            TreeNode::folder([
                ("Подпапка1", TreeNode::folder([("info.txt", TreeNode::file("Текст из файла info.txt"))])),
                ("Подпапка2", TreeNode::folder([("data.txt", TreeNode::file("Другой текст из файла"))])),
            ]),
        ),
        (
            "Папка2",
            TreeNode::folder([("readme.txt", TreeNode::file("Это readme файл в Папке2"))]),
        ),
    ])
}

/// Parses a JSON tree description.
pub fn parse_description(json: &str) -> AppResult<TreeDescription> {
    Ok(serde_json::from_str(json)?)
}

/// Reads and parses a JSON tree description file.
pub fn load_description(path: &Path) -> AppResult<TreeDescription> {
    let json = fs_err::read_to_string(path)?;
    parse_description(&json)
}

/// Returns true when `name` is a single, ordinary path component.
///
/// Rejects empty names, `.`, `..`, and anything containing a separator.
pub fn is_plain_component(name: &str) -> bool {
    !name.is_empty() && name != "." && name != ".." && !name.chars().any(std::path::is_separator)
}
