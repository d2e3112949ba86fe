//! Builds a tree from a directory listing and renders it
//!
//! The engine never touches the filesystem itself; this is the kind of
//! caller that feeds it. Run with `cargo run --example walk_directory [path]`.

use std::fs;
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Result;
use traverse::prelude::*;

fn main() -> Result<()> {
    env_logger::init();

    let root_path = std::env::args().nth(1).unwrap_or_else(|| ".".to_string());
    let name = Path::new(&root_path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| root_path.clone());

    let mut tree = Tree::new(name);
    let root = tree.root();
    load(&mut tree, root, Path::new(&root_path))?;

    // Level-order count of what we just built.
    let entries = AtomicUsize::new(0);
    BreadthFirst::new().traverse(
        &tree,
        root,
        &|_: &Tree<String>, _: NodeId| {
            entries.fetch_add(1, Ordering::Relaxed);
        },
        &ExpandAll,
    )?;
    log::info!("walked {} entries under {}", entries.load(Ordering::Relaxed), root_path);

    if let Some(view) = TreeView::new(&tree, root) {
        print!("{}", render(&view));
    }
    Ok(())
}

fn load(tree: &mut Tree<String>, node: NodeId, path: &Path) -> Result<()> {
    let mut entries = fs::read_dir(path)?.collect::<std::io::Result<Vec<_>>>()?;

    // Directories first, then files, alphabetically within each group.
    entries.sort_by_key(|entry| (!entry.path().is_dir(), entry.file_name()));

    for entry in entries {
        let name = entry.file_name().to_string_lossy().to_string();
        let child = tree.add_child(node, name)?;
        let entry_path = entry.path();
        if entry_path.is_dir() {
            load(tree, child, &entry_path)?;
        }
    }
    Ok(())
}
