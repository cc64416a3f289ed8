//! Tree builder against a scratch directory

mod common;

use std::collections::BTreeMap;
use std::path::Path;

use common::scenario_tree;
use dircore::tree::{self, description, TreeNode};
use dircore::{default_description, load_description};
use pretty_assertions::assert_eq;

/// Relative path → file content (None for folders), for whole-tree comparison
fn snapshot(root: &Path) -> BTreeMap<String, Option<String>> {
    fn visit(root: &Path, dir: &Path, out: &mut BTreeMap<String, Option<String>>) {
        for entry in fs_err::read_dir(dir).unwrap() {
            let path = entry.unwrap().path();
            let relative = path.strip_prefix(root).unwrap().to_string_lossy().into_owned();
            if path.is_dir() {
                out.insert(relative, None);
                visit(root, &path, out);
            } else {
                out.insert(relative, Some(fs_err::read_to_string(&path).unwrap()));
            }
        }
    }

    let mut out = BTreeMap::new();
    visit(root, root, &mut out);
    out
}

#[test]
fn test_build_twice_equals_build_once() {
    let once = tempfile::tempdir().unwrap();
    let twice = tempfile::tempdir().unwrap();

    tree::build(once.path(), &default_description()).unwrap();
    tree::build(twice.path(), &default_description()).unwrap();
    tree::build(twice.path(), &default_description()).unwrap();

    assert_eq!(snapshot(once.path()), snapshot(twice.path()));
}

#[test]
fn test_build_scenario_layout() {
    let dir = tempfile::tempdir().unwrap();
    tree::build(dir.path(), &scenario_tree()).unwrap();

    let expected: BTreeMap<String, Option<String>> = [
        ("A".to_string(), None),
        ("A/C".to_string(), None),
        ("A/C/info.txt".to_string(), Some("hello".to_string())),
        ("B".to_string(), None),
    ]
    .into_iter()
    .collect();
    assert_eq!(snapshot(dir.path()), expected);
}

#[test]
fn test_build_keeps_unrelated_entries() {
    let dir = tempfile::tempdir().unwrap();
    fs_err::create_dir(dir.path().join("A")).unwrap();
    fs_err::write(dir.path().join("A/extra.md"), "keep me").unwrap();

    tree::build(dir.path(), &scenario_tree()).unwrap();

    assert_eq!(fs_err::read_to_string(dir.path().join("A/extra.md")).unwrap(), "keep me");
    assert_eq!(fs_err::read_to_string(dir.path().join("A/C/info.txt")).unwrap(), "hello");
}

#[test]
fn test_build_from_json_file() {
    let dir = tempfile::tempdir().unwrap();
    let json = dir.path().join("tree.json");
    fs_err::write(&json, r#"{"Guides": {"Setup": {"steps.txt": "1. build\n2. run"}}}"#).unwrap();

    let loaded = load_description(&json).unwrap();
    assert_eq!(
        loaded,
        description([(
            "Guides",
            TreeNode::folder([("Setup", TreeNode::folder([("steps.txt", TreeNode::file("1. build\n2. run"))]))]),
        )])
    );

    let root = dir.path().join("tree");
    tree::build(&root, &loaded).unwrap();
    assert_eq!(
        fs_err::read_to_string(root.join("Guides/Setup/steps.txt")).unwrap(),
        "1. build\n2. run"
    );
}

#[test]
fn test_build_writes_utf8_verbatim() {
    let dir = tempfile::tempdir().unwrap();
    let text = "Привет, мир! 🌍\r\nline two";
    tree::build(dir.path(), &description([("hi.txt", TreeNode::file(text))])).unwrap();
    assert_eq!(fs_err::read(dir.path().join("hi.txt")).unwrap(), text.as_bytes());
}
