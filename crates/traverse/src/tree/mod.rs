//! Core tree abstraction for hierarchical data
//!
//! This module provides the arena-backed tree the traversal strategies walk,
//! together with the visitor/continuation contracts callers plug into a
//! traversal.

mod arena;
mod error;
mod node;
mod visit;

pub use arena::Tree;
pub use error::TreeError;
pub use node::{Node, NodeId};
pub use visit::{Descend, ExpandAll, Visitor};
