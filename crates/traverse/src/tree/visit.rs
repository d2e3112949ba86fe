//! Visitor and continuation contracts
//!
//! Traversal order lives in the strategies; what happens at each node and
//! whether a subtree is expanded at all come from the caller through these
//! two contracts. Both are blanket-implemented for closures, so plain
//! function values work without any wrapper types.

use crate::tree::{NodeId, Tree};

/// Per-node callback invoked by a traversal strategy
///
/// The receiver is shared because the breadth-first strategy may call one
/// visitor from several rayon workers at once; a stateful visitor shares its
/// state through interior mutability (a `Mutex`, an atomic counter). A panic
/// escaping `visit` propagates out of `traverse` untouched; the engine does
/// not catch, retry or log it.
pub trait Visitor<T> {
    /// Called exactly once per visited node
    fn visit(&self, tree: &Tree<T>, node: NodeId);
}

impl<T, F> Visitor<T> for F
where
    F: Fn(&Tree<T>, NodeId),
{
    fn visit(&self, tree: &Tree<T>, node: NodeId) {
        self(tree, node)
    }
}

/// Continuation predicate deciding whether a node's subtree is expanded
///
/// Returning `false` prunes the node's descendants without visiting them;
/// the node itself is still visited.
pub trait Descend<T> {
    /// True to expand `node`'s children
    fn descend(&self, tree: &Tree<T>, node: NodeId) -> bool;
}

impl<T, F> Descend<T> for F
where
    F: Fn(&Tree<T>, NodeId) -> bool,
{
    fn descend(&self, tree: &Tree<T>, node: NodeId) -> bool {
        self(tree, node)
    }
}

/// The always-expand continuation
#[derive(Debug, Clone, Copy, Default)]
pub struct ExpandAll;

impl<T> Descend<T> for ExpandAll {
    fn descend(&self, _tree: &Tree<T>, _node: NodeId) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn test_closures_satisfy_the_contracts() {
        let tree = Tree::new(1);
        let seen = Mutex::new(Vec::new());

        let visitor = |_: &Tree<i32>, id: NodeId| seen.lock().unwrap().push(id);
        Visitor::visit(&visitor, &tree, tree.root());
        assert_eq!(*seen.lock().unwrap(), vec![tree.root()]);

        let gate = |t: &Tree<i32>, id: NodeId| t.value(id) == Some(&1);
        assert!(Descend::descend(&gate, &tree, tree.root()));
    }

    #[test]
    fn test_expand_all() {
        let tree = Tree::new("x");
        assert!(Descend::descend(&ExpandAll, &tree, tree.root()));
    }
}
