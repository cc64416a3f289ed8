//! Directory listing and the leaf rule.
//!
//! A directory is a leaf when it holds exactly one `.txt` file and no
//! subfolders. A directory with subfolders is a branch (menu). Anything
//! else is a dead end and is reported to the user as an error.
//!
//! Listings are read from disk on every call, nothing is cached.

use std::ffi::OsStr;
use std::io;
use std::path::{Path, PathBuf};

use super::menu::Menu;
use crate::core::config::ui;

/// Immediate contents of a directory, each list sorted by name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub subdirs: Vec<String>,
    pub text_files: Vec<String>,
}

/// Classification of a directory under the leaf rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    Branch,
    Leaf,
    DeadEnd,
}

/// What should be displayed for a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    Menu(Menu),
    Leaf { file: PathBuf, content: String },
    DeadEnd { text_files: usize },
}

impl Listing {
    pub fn kind(&self) -> NodeKind {
        match (self.subdirs.len(), self.text_files.len()) {
            (0, 1) => NodeKind::Leaf,
            (0, _) => NodeKind::DeadEnd,
            _ => NodeKind::Branch,
        }
    }
}

/// Lists `path`, splitting entries into subfolders and text files.
///
/// Entries whose names are not valid UTF-8 are skipped; they could not be
/// sent back as callback data anyway.
pub fn list_dir(path: &Path) -> io::Result<Listing> {
    let mut listing = Listing::default();

    for entry in fs_err::read_dir(path)? {
        let entry = entry?;
        let name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(raw) => {
                log::debug!("Skipping non UTF-8 entry {:?} in {}", raw, path.display());
                continue;
            }
        };

        if entry.path().is_dir() {
            listing.subdirs.push(name);
        } else if name.ends_with(ui::TEXT_SUFFIX) {
            listing.text_files.push(name);
        }
    }

    listing.subdirs.sort();
    listing.text_files.sort();
    Ok(listing)
}

/// Computes what to display for `path`; `root` decides whether a back item is added.
pub fn screen(root: &Path, path: &Path) -> io::Result<Screen> {
    let listing = list_dir(path)?;

    Ok(match listing.kind() {
        NodeKind::Branch => Screen::Menu(Menu::for_folders(&listing.subdirs, path == root)),
        NodeKind::Leaf => {
            let file = path.join(&listing.text_files[0]);
            let content = fs_err::read_to_string(&file)?;
            Screen::Leaf { file, content }
        }
        NodeKind::DeadEnd => Screen::DeadEnd {
            text_files: listing.text_files.len(),
        },
    })
}

/// True when the folder at `path` is named like the back button's token.
///
/// Its button decodes as "back", so the folder can never be opened.
pub fn is_back_shadowed(path: &Path) -> bool {
    path.file_name() == Some(OsStr::new(ui::BACK_TOKEN))
}

/// Every directory under `root` (root included, depth first, sorted) with its kind.
pub fn walk(root: &Path) -> io::Result<Vec<(PathBuf, NodeKind)>> {
    let mut out = Vec::new();
    walk_into(root, &mut out)?;
    Ok(out)
}

fn walk_into(dir: &Path, out: &mut Vec<(PathBuf, NodeKind)>) -> io::Result<()> {
    let listing = list_dir(dir)?;
    out.push((dir.to_path_buf(), listing.kind()));
    for name in &listing.subdirs {
        walk_into(&dir.join(name), out)?;
    }
    Ok(())
}
