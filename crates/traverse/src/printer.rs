//! ASCII-art rendering of hierarchical structures
//!
//! The printer works over *any* hierarchical object through the small
//! [`Hierarchy`] contract, not just [`Tree`]; [`TreeView`] adapts an arena
//! tree to it. Output is one line per node with box-drawing connectors:
//!
//! ```text
//! project
//! ├─ src
//! │  ├─ main.rs
//! │  └─ lib.rs
//! └─ README.md
//! ```

use std::fmt;
use std::io::{self, Write};

use crate::tree::{NodeId, Tree};

/// Template contract for anything the printer can render
///
/// Implementations hand out child *handles*, so the trait is meant for
/// reference or copyable view types rather than owning values — implement it
/// for `&MyNode`, not `MyNode`.
pub trait Hierarchy: Sized {
    /// Display label for this node
    fn value(&self) -> String;

    /// Child handles, in render order
    fn children(&self) -> Vec<Self>;

    /// Leaves render without descending
    fn is_leaf(&self) -> bool {
        self.children().is_empty()
    }
}

/// Render `root` into a string, one line per node
pub fn render<H: Hierarchy>(root: &H) -> String {
    let mut out = String::new();
    for line in lines(root) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Stream `root` line-by-line into `out`
///
/// Same output as [`render`] without buffering the whole picture first.
pub fn write<H: Hierarchy, W: Write>(root: &H, out: &mut W) -> io::Result<()> {
    for line in lines(root) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

/// One rendered line per node, pre-order
///
/// Uses an explicit work stack, so structures of any depth render without
/// exhausting the call stack.
fn lines<H: Hierarchy>(root: &H) -> Vec<String> {
    let mut out = vec![root.value()];
    let mut stack: Vec<(H, String, bool)> = Vec::new();
    if !root.is_leaf() {
        push_children(root, "", &mut stack);
    }
    while let Some((node, prefix, last)) = stack.pop() {
        let connector = if last { "└─ " } else { "├─ " };
        out.push(format!("{}{}{}", prefix, connector, node.value()));
        if !node.is_leaf() {
            let child_prefix = format!("{}{}", prefix, if last { "   " } else { "│  " });
            push_children(&node, &child_prefix, &mut stack);
        }
    }
    out
}

fn push_children<H: Hierarchy>(node: &H, prefix: &str, stack: &mut Vec<(H, String, bool)>) {
    let children = node.children();
    let count = children.len();
    // Reverse push keeps the first child on top of the stack.
    for (i, child) in children.into_iter().enumerate().rev() {
        stack.push((child, prefix.to_string(), i + 1 == count));
    }
}

/// Copyable view adapting one arena node to the printer contract
#[derive(Debug, Clone, Copy)]
pub struct TreeView<'a, T> {
    tree: &'a Tree<T>,
    id: NodeId,
}

impl<'a, T> TreeView<'a, T> {
    /// View of `id` within `tree`, `None` if `id` is dead
    pub fn new(tree: &'a Tree<T>, id: NodeId) -> Option<Self> {
        tree.get(id).map(|_| Self { tree, id })
    }

    /// The viewed node id
    pub fn id(&self) -> NodeId {
        self.id
    }
}

impl<T: fmt::Display> Hierarchy for TreeView<'_, T> {
    fn value(&self) -> String {
        self.tree
            .value(self.id)
            .map(|value| value.to_string())
            .unwrap_or_default()
    }

    fn children(&self) -> Vec<Self> {
        self.tree
            .children(self.id)
            .iter()
            .map(|&id| Self {
                tree: self.tree,
                id,
            })
            .collect()
    }

    fn is_leaf(&self) -> bool {
        !self.tree.has_children(self.id)
    }
}
