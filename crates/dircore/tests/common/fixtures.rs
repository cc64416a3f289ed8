//! Test fixtures: scratch folder trees wired to a navigator

use std::path::{Path, PathBuf};
use std::sync::Arc;

use dircore::navigation::MemorySessionStore;
use dircore::tree::{self, description, TreeDescription, TreeNode};
use dircore::Navigator;
use tempfile::TempDir;

use super::RecordingOutbound;

/// Root has `A` and `B`; `A/C` holds `info.txt` = "hello"; `B` is empty.
pub fn scenario_tree() -> TreeDescription {
    description([
        (
            "A",
            TreeNode::folder([("C", TreeNode::folder([("info.txt", TreeNode::file("hello"))]))]),
        ),
        ("B", TreeNode::Folder(TreeDescription::new())),
    ])
}

/// A built tree in a temp dir plus a navigator recording its output
pub struct TestTree {
    pub dir: TempDir,
    pub navigator: Navigator,
    pub outbound: Arc<RecordingOutbound>,
}

impl TestTree {
    pub fn new(description: &TreeDescription) -> Self {
        let dir = tempfile::tempdir().expect("failed to create tempdir");
        tree::build(dir.path(), description).expect("failed to build tree");

        let outbound = Arc::new(RecordingOutbound::new());
        let navigator = Navigator::new(dir.path(), Arc::new(MemorySessionStore::new()), outbound.clone());
        Self { dir, navigator, outbound }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}
