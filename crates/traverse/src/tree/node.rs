//! Core node types for the tree arena

use std::fmt;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a node within a tree
///
/// Internally represented as an index into an arena-based storage. Ids are
/// assigned on insertion and never reused, so an id held across a
/// [`remove_child`](crate::tree::Tree::remove_child) stays dead instead of
/// silently aliasing a newer node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub usize);

impl NodeId {
    /// The root node always has ID 0
    pub const ROOT: NodeId = NodeId(0);

    /// Create a new NodeId from a usize
    pub const fn new(id: usize) -> Self {
        NodeId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

impl From<usize> for NodeId {
    fn from(id: usize) -> Self {
        NodeId(id)
    }
}

impl From<NodeId> for usize {
    fn from(id: NodeId) -> Self {
        id.0
    }
}

/// Child-id storage; most nodes in filesystem-like trees hold only a handful
/// of children, so the first few live inline.
pub(crate) type ChildList = SmallVec<[NodeId; 4]>;

/// A single node in the tree
///
/// Generic over the value type `T`, which can carry arbitrary user-defined
/// payloads (file metadata, syntax kinds, breadcrumb labels, ...). The
/// relational fields are managed by [`Tree`](crate::tree::Tree): only the
/// value is freely mutable from outside.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Node<T> {
    /// The value carried by this node
    pub value: T,
    /// Ordered child ids, insertion order
    pub(crate) children: ChildList,
    /// Non-owning back-reference to the parent, `None` for the root
    pub(crate) parent: Option<NodeId>,
}

impl<T> Node<T> {
    pub(crate) fn new(value: T, parent: Option<NodeId>) -> Self {
        Self {
            value,
            children: ChildList::new(),
            parent,
        }
    }

    /// Ordered child ids of this node
    ///
    /// This is the live sequence; it changes under `add_child`/`remove_child`.
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Parent id, `None` for the root
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns true if this node has at least one child
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }
}

impl<T: fmt::Display> fmt::Display for Node<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} children)", self.value, self.children.len())
    }
}
