//! Pre-order flattening of a subtree into a node list

use crate::tree::{NodeId, Tree, TreeError};

/// All descendants of `root` in pre-order, excluding `root` itself
///
/// The whole subtree is materialized eagerly into one list. There is no
/// visited-set bookkeeping: the arena cannot express a cycle, so termination
/// is structural.
///
/// # Errors
///
/// [`TreeError::NodeNotFound`] if `root` is not a live node.
pub fn descendants<T>(tree: &Tree<T>, root: NodeId) -> Result<Vec<NodeId>, TreeError> {
    if tree.get(root).is_none() {
        return Err(TreeError::NodeNotFound { id: root });
    }
    let mut out = Vec::new();
    collect(tree, root, &mut out);
    Ok(out)
}

fn collect<T>(tree: &Tree<T>, node: NodeId, out: &mut Vec<NodeId>) {
    for &child in tree.children(node) {
        out.push(child);
        collect(tree, child, out);
    }
}
