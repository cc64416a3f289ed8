//! Materializes a [`TreeDescription`] on disk.
//!
//! Folders are created when missing, files are always overwritten, so
//! running the builder twice leaves the same tree as running it once.

use std::path::Path;

use super::{is_plain_component, TreeDescription, TreeNode};
use crate::core::error::{AppError, AppResult};

/// Counts of what a build touched.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct BuildReport {
    pub folders: usize,
    pub files: usize,
}

/// Realizes `description` under `root`, creating `root` itself if needed.
///
/// Every entry name is validated before anything is written, so a
/// description containing `..` or a separator fails without side effects.
///
/// # Errors
/// * `AppError::InvalidName` - an entry name is not a plain path component
/// * `AppError::Io` - a folder cannot be created or a file cannot be written
pub fn build(root: &Path, description: &TreeDescription) -> AppResult<BuildReport> {
    validate(description)?;

    fs_err::create_dir_all(root)?;
    let mut report = BuildReport::default();
    build_into(root, description, &mut report)?;

    log::info!(
        "Tree built at {}: {} folder(s), {} file(s)",
        root.display(),
        report.folders,
        report.files
    );
    Ok(report)
}

fn validate(description: &TreeDescription) -> AppResult<()> {
    for (name, node) in description {
        if !is_plain_component(name) {
            return Err(AppError::InvalidName(name.clone()));
        }
        if let TreeNode::Folder(children) = node {
            validate(children)?;
        }
    }
    Ok(())
}

fn build_into(dir: &Path, description: &TreeDescription, report: &mut BuildReport) -> AppResult<()> {
    for (name, node) in description {
        let path = dir.join(name);
        match node {
            TreeNode::Folder(children) => {
                fs_err::create_dir_all(&path)?;
                report.folders += 1;
                build_into(&path, children, report)?;
            }
            TreeNode::File(content) => {
                log::debug!("Writing {}", path.display());
                fs_err::write(&path, content.as_bytes())?;
                report.files += 1;
            }
        }
    }
    Ok(())
}
