//! Pre-order traversal with adaptive recursive/iterative execution

use log::debug;

use crate::strategy::Traversal;
use crate::tree::{Descend, NodeId, Tree, TreeError, Visitor};

/// Live node count at which recursion gives way to an explicit stack
pub const DEFAULT_RECURSION_LIMIT: usize = 500;

/// Depth-first (pre-order) traversal
///
/// A node is always visited strictly before any of its descendants, children
/// left to right. Small trees are walked with plain recursion; once the tree
/// holds at least `recursion_limit` live nodes the walk switches to an
/// explicit heap-allocated stack. Recursion depth is bounded by the live node
/// count, so the recursive path cannot run deeper than the limit it is gated
/// on. Both paths produce the identical visitation sequence and prune
/// identically on a false continuation.
///
/// Depth-first never parallelizes; the adaptive switch only moves pending
/// work between the call stack and the heap.
#[derive(Debug, Clone, Copy)]
pub struct DepthFirst {
    /// Live node count at which to switch to the iterative form
    pub recursion_limit: usize,
}

impl Default for DepthFirst {
    fn default() -> Self {
        Self {
            recursion_limit: DEFAULT_RECURSION_LIMIT,
        }
    }
}

impl DepthFirst {
    /// Strategy with the default recursion limit
    pub fn new() -> Self {
        Self::default()
    }

    /// Strategy switching to the explicit stack at `limit` live nodes
    pub fn with_recursion_limit(limit: usize) -> Self {
        Self {
            recursion_limit: limit,
        }
    }

    fn walk_recursive<T, V, D>(tree: &Tree<T>, node: NodeId, visitor: &V, descend: &D)
    where
        V: Visitor<T>,
        D: Descend<T>,
    {
        visitor.visit(tree, node);
        if descend.descend(tree, node) {
            for &child in tree.children(node) {
                Self::walk_recursive(tree, child, visitor, descend);
            }
        }
    }

    fn walk_iterative<T, V, D>(tree: &Tree<T>, root: NodeId, visitor: &V, descend: &D)
    where
        V: Visitor<T>,
        D: Descend<T>,
    {
        let mut stack = vec![root];
        while let Some(node) = stack.pop() {
            visitor.visit(tree, node);
            if descend.descend(tree, node) {
                // Reverse push keeps the leftmost child on top of the stack.
                for &child in tree.children(node).iter().rev() {
                    stack.push(child);
                }
            }
        }
    }
}

impl Traversal for DepthFirst {
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
        D: Descend<T> + Sync,
    {
        if tree.get(root).is_none() {
            return Err(TreeError::NodeNotFound { id: root });
        }

        if tree.len() >= self.recursion_limit {
            debug!(
                "explicit-stack pre-order: {} live nodes (recursion limit {})",
                tree.len(),
                self.recursion_limit
            );
            Self::walk_iterative(tree, root, visitor, descend);
        } else {
            Self::walk_recursive(tree, root, visitor, descend);
        }
        Ok(root)
    }
}
