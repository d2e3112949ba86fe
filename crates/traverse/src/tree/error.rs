//! Error types for tree operations

use derive_more::{Display, Error};

use crate::tree::NodeId;

/// Errors raised by tree operations
///
/// Both variants are fatal to the local call; nothing in the engine retries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum TreeError {
    /// A child index outside the 0-based range of a node's child list
    #[display(fmt = "child index {} out of range ({} children)", index, len)]
    IndexOutOfRange {
        /// The requested index
        index: usize,
        /// The actual number of children
        len: usize,
    },
    /// The id does not name a live node in this tree
    #[display(fmt = "no live node {}", id)]
    NodeNotFound {
        /// The offending id
        id: NodeId,
    },
}
