//! The engine operates on caller-built trees; this exercises the typical
//! caller shape — a tree built from a directory listing.

use std::fs;
use std::path::Path;

use pretty_assertions::assert_eq;
use tempfile::TempDir;
use traverse::prelude::*;

fn load(tree: &mut Tree<String>, node: NodeId, path: &Path) -> std::io::Result<()> {
    let mut entries = fs::read_dir(path)?.collect::<std::io::Result<Vec<_>>>()?;
    entries.sort_by_key(|entry| (!entry.path().is_dir(), entry.file_name()));

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let child = tree
            .add_child(node, name)
            .expect("node created by this walk is live");
        let entry_path = entry.path();
        if entry_path.is_dir() {
            load(tree, child, &entry_path)?;
        }
    }
    Ok(())
}

fn scaffold() -> (TempDir, Tree<String>) {
    let temp = TempDir::new().unwrap();
    let root = temp.path();

    // root/
    //   file1.txt
    //   dir1/
    //     file2.txt
    //     dir2/
    //       file3.txt
    fs::write(root.join("file1.txt"), "content1").unwrap();
    fs::create_dir(root.join("dir1")).unwrap();
    fs::write(root.join("dir1/file2.txt"), "content2").unwrap();
    fs::create_dir(root.join("dir1/dir2")).unwrap();
    fs::write(root.join("dir1/dir2/file3.txt"), "content3").unwrap();

    let mut tree = Tree::new("root".to_string());
    let id = tree.root();
    load(&mut tree, id, root).unwrap();
    (temp, tree)
}

#[test]
fn listing_builds_the_expected_tree() {
    let (_temp, tree) = scaffold();

    assert_eq!(tree.len(), 6);
    let labels: Vec<_> = tree
        .children(tree.root())
        .iter()
        .map(|&id| tree.value(id).unwrap().clone())
        .collect();
    // Directories sort before files.
    assert_eq!(labels, vec!["dir1".to_string(), "file1.txt".to_string()]);
}

#[test]
fn traversal_reaches_every_entry() {
    let (_temp, tree) = scaffold();

    let flat = descendants(&tree, tree.root()).unwrap();
    assert_eq!(flat.len(), tree.len() - 1);

    let deepest = flat
        .iter()
        .find(|&&id| tree.value(id).map(String::as_str) == Some("file3.txt"))
        .copied()
        .unwrap();
    assert_eq!(tree.depth(deepest), 3);
    assert_eq!(tree.ancestors(deepest).len(), 3);
}

#[test]
fn rendering_matches_the_listing_shape() {
    let (_temp, tree) = scaffold();
    let view = TreeView::new(&tree, tree.root()).unwrap();
    let rendered = render(&view);

    assert_eq!(rendered.lines().count(), tree.len());
    assert!(rendered.contains("└─ file1.txt"));
    assert!(rendered.contains("│  ├─ dir2"));
    assert!(rendered.contains("│  └─ file2.txt"));
}
