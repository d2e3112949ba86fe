//! Hierarchical traversal engine
//!
//! A library for walking and flattening tree-shaped data (syntax-tree-like
//! structures, file hierarchies, breadcrumb paths) with pluggable traversal
//! strategies, plus utilities built on the same tree.
//!
//! # Core Concepts
//!
//! - **Tree**: arena-backed rooted tree, nodes addressed by id
//! - **Visitor / Descend**: caller callbacks — what happens at each node,
//!   and whether a subtree is expanded at all (pruning)
//! - **BreadthFirst / DepthFirst**: strategies behind one contract, each
//!   picking its execution form (sequential, explicit-stack, rayon fan-out)
//!   from the size of the structure actually in hand
//! - **descendants / printer**: pre-order flattening and ASCII rendering
//!
//! # Example
//!
//! ```
//! use std::sync::Mutex;
//! use traverse::prelude::*;
//!
//! let mut tree = Tree::new("root");
//! let a = tree.add_child(tree.root(), "a").unwrap();
//! tree.add_child(a, "b").unwrap();
//!
//! let paths = Mutex::new(Vec::new());
//! DepthFirst::new()
//!     .traverse(
//!         &tree,
//!         tree.root(),
//!         &|t: &Tree<&str>, id: NodeId| paths.lock().unwrap().push(t.path(id)),
//!         &ExpandAll,
//!     )
//!     .unwrap();
//! assert_eq!(paths.into_inner().unwrap(), vec!["0", "0/1", "0/1/2"]);
//! ```

pub mod flatten;
pub mod printer;
pub mod strategy;
pub mod tree;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::flatten::descendants;
    pub use crate::printer::{render, Hierarchy, TreeView};
    pub use crate::strategy::{BreadthFirst, DepthFirst, Traversal};
    pub use crate::tree::{Descend, ExpandAll, Node, NodeId, Tree, TreeError, Visitor};
}
