//! Pluggable traversal strategies
//!
//! A strategy owns the order in which nodes are reached; the caller supplies
//! what happens at each node ([`Visitor`]) and where to stop descending
//! ([`Descend`]). Every strategy visits exactly the nodes whose whole
//! ancestor chain from the traversal root satisfies the continuation, and
//! hands the root id back unchanged.

mod breadth;
mod depth;

pub use breadth::{BreadthFirst, DEFAULT_PARALLEL_WIDTH};
pub use depth::{DepthFirst, DEFAULT_RECURSION_LIMIT};

use crate::tree::{Descend, NodeId, Tree, TreeError, Visitor};

/// Uniform contract implemented by every traversal strategy
///
/// The `Send + Sync` bounds are what make the breadth-first fan-out sound:
/// node values and both callbacks may be shared across rayon workers.
/// Traversal borrows the tree shared for its whole duration, so the shape
/// cannot change mid-walk.
pub trait Traversal {
    /// Visit the subtree under `root`, returning `root` unchanged
    ///
    /// Traversal is read-only with respect to tree shape; the only
    /// observable output is whatever the visitor does.
    ///
    /// # Errors
    ///
    /// [`TreeError::NodeNotFound`] if `root` is not a live node.
    fn traverse<T, V, D>(
        &self,
        tree: &Tree<T>,
        root: NodeId,
        visitor: &V,
        descend: &D,
    ) -> Result<NodeId, TreeError>
    where
        T: Send + Sync,
        V: Visitor<T> + Sync,
        D: Descend<T> + Sync;
}
