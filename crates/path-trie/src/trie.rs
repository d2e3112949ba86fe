//! Arena-backed trie keyed by string segments

use std::collections::HashMap;
use std::fmt;

use derive_more::{Display, Error};
use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Unique identifier for a node within a trie
///
/// Internally an index into arena-based storage. The trie has no removal
/// operation, so every id it ever hands out stays valid for its lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TrieId(pub usize);

impl TrieId {
    /// The root node always has ID 0
    pub const ROOT: TrieId = TrieId(0);

    /// Create a new TrieId from a usize
    pub const fn new(id: usize) -> Self {
        TrieId(id)
    }

    /// Get the inner usize value
    pub const fn get(self) -> usize {
        self.0
    }
}

impl fmt::Display for TrieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TrieId({})", self.0)
    }
}

/// Errors raised by trie operations
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
pub enum TrieError {
    /// The id was issued by a different trie
    #[display(fmt = "no node {} in this trie", id)]
    NodeNotFound {
        /// The offending id
        id: TrieId,
    },
    /// A named lookup missed
    #[display(fmt = "no child keyed {:?}", key)]
    KeyNotFound {
        /// The missing segment
        key: String,
    },
}

/// One vertex of the trie
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
struct TrieNode<T> {
    /// The path segment this node is keyed by, empty for the root
    key: String,
    /// Non-owning back-reference, `None` for the root
    parent: Option<TrieId>,
    /// Children by segment; unordered, unique keys
    children: HashMap<String, TrieId>,
    /// Payload attached to this exact path, if any
    data: Option<T>,
    /// Descendants ever created beneath this node
    nested_count: usize,
}

/// A path-segment trie with ancestor-propagated aggregate counts
///
/// Children are created lazily and exactly once per key: `find_or_add_child`
/// is idempotent, and only an actual creation bumps `nested_count` on every
/// node up the ancestor chain. Nothing is ever removed, so the counts are
/// monotonically non-decreasing and ids never die.
///
/// # Example
///
/// ```
/// use path_trie::PathTrie;
///
/// let mut trie = PathTrie::new();
/// let docs = trie.insert_path(["home", "docs"]).unwrap();
/// trie.set_data(docs, 42).unwrap();
///
/// assert_eq!(trie.lookup(["home", "docs"]), Ok(docs));
/// assert_eq!(trie.data(docs), Some(&42));
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathTrie<T> {
    /// Arena storage; slot index equals id
    nodes: Vec<TrieNode<T>>,
}

impl<T> PathTrie<T> {
    /// Create a trie holding only the root (empty key, no parent)
    pub fn new() -> Self {
        Self {
            nodes: vec![TrieNode {
                key: String::new(),
                parent: None,
                children: HashMap::new(),
                data: None,
                nested_count: 0,
            }],
        }
    }

    /// Get the root node ID (always exists)
    pub fn root(&self) -> TrieId {
        TrieId::ROOT
    }

    /// Total number of nodes, the root included
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// The root always exists, so a trie is never empty
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn node(&self, id: TrieId) -> Result<&TrieNode<T>, TrieError> {
        self.nodes.get(id.get()).ok_or(TrieError::NodeNotFound { id })
    }

    /// The segment this node is keyed by
    ///
    /// Empty for the root, `None` for a foreign id.
    pub fn key(&self, id: TrieId) -> Option<&str> {
        self.nodes.get(id.get()).map(|node| node.key.as_str())
    }

    /// Parent id, `None` for the root and for foreign ids
    pub fn parent(&self, id: TrieId) -> Option<TrieId> {
        self.nodes.get(id.get())?.parent
    }

    /// Payload attached to this node, if any
    pub fn data(&self, id: TrieId) -> Option<&T> {
        self.nodes.get(id.get())?.data.as_ref()
    }

    /// Mutable payload access
    pub fn data_mut(&mut self, id: TrieId) -> Option<&mut T> {
        self.nodes.get_mut(id.get())?.data.as_mut()
    }

    /// Attach a payload, returning the previous one
    ///
    /// # Errors
    ///
    /// [`TrieError::NodeNotFound`] for a foreign id.
    pub fn set_data(&mut self, id: TrieId, value: T) -> Result<Option<T>, TrieError> {
        self.node(id)?;
        Ok(self.nodes[id.get()].data.replace(value))
    }

    /// Descendants ever created beneath this node
    ///
    /// Returns 0 for leaves and for foreign ids.
    pub fn nested_count(&self, id: TrieId) -> usize {
        self.nodes.get(id.get()).map(|node| node.nested_count).unwrap_or(0)
    }

    /// Children of a node as `(segment, id)` pairs, in no particular order
    pub fn children(&self, id: TrieId) -> impl Iterator<Item = (&str, TrieId)> + '_ {
        self.nodes
            .get(id.get())
            .into_iter()
            .flat_map(|node| node.children.iter().map(|(key, &child)| (key.as_str(), child)))
    }

    /// Return the child of `node` keyed by `segment`, creating it on demand
    ///
    /// Idempotent: the same segment on the same node always yields the same
    /// id. An actual creation increments `nested_count` on every node from
    /// the new child's parent up to the root; a repeat lookup touches
    /// nothing.
    ///
    /// # Errors
    ///
    /// [`TrieError::NodeNotFound`] for a foreign `node`.
    pub fn find_or_add_child(&mut self, node: TrieId, segment: &str) -> Result<TrieId, TrieError> {
        if let Some(&existing) = self.node(node)?.children.get(segment) {
            return Ok(existing);
        }

        let id = TrieId::new(self.nodes.len());
        self.nodes.push(TrieNode {
            key: segment.to_string(),
            parent: Some(node),
            children: HashMap::new(),
            data: None,
            nested_count: 0,
        });
        self.nodes[node.get()].children.insert(segment.to_string(), id);

        // Every creation counts once on the whole ancestor chain.
        let mut current = Some(node);
        while let Some(ancestor) = current {
            self.nodes[ancestor.get()].nested_count += 1;
            current = self.nodes[ancestor.get()].parent;
        }
        trace!("created segment {:?} as {}", segment, id);
        Ok(id)
    }

    /// Walk `segments` from the root, creating missing nodes along the way
    ///
    /// Returns the id of the final segment's node. An empty iterator returns
    /// the root.
    pub fn insert_path<I, S>(&mut self, segments: I) -> Result<TrieId, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.root();
        for segment in segments {
            current = self.find_or_add_child(current, segment.as_ref())?;
        }
        Ok(current)
    }

    /// Single-step named lookup
    ///
    /// # Errors
    ///
    /// [`TrieError::KeyNotFound`] if `node` has no child keyed `segment`;
    /// [`TrieError::NodeNotFound`] for a foreign `node`.
    pub fn child(&self, node: TrieId, segment: &str) -> Result<TrieId, TrieError> {
        self.node(node)?
            .children
            .get(segment)
            .copied()
            .ok_or_else(|| TrieError::KeyNotFound {
                key: segment.to_string(),
            })
    }

    /// Walk `segments` from the root without creating anything
    ///
    /// # Errors
    ///
    /// [`TrieError::KeyNotFound`] naming the first missing segment.
    pub fn lookup<I, S>(&self, segments: I) -> Result<TrieId, TrieError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut current = self.root();
        for segment in segments {
            current = self.child(current, segment.as_ref())?;
        }
        Ok(current)
    }
}

impl<T: PartialEq> PathTrie<T> {
    /// First node whose payload equals `target`
    ///
    /// This is a value scan over every node, O(len), not a key lookup;
    /// which of several equal payloads wins is unspecified because children
    /// are unordered. Callers after a known path should use [`lookup`]
    /// instead.
    ///
    /// [`lookup`]: PathTrie::lookup
    pub fn find_by_data(&self, target: &T) -> Option<TrieId> {
        self.scan(self.root(), target)
    }

    fn scan(&self, node: TrieId, target: &T) -> Option<TrieId> {
        let current = &self.nodes[node.get()];
        if current.data.as_ref() == Some(target) {
            return Some(node);
        }
        for &child in current.children.values() {
            if let Some(found) = self.scan(child, target) {
                return Some(found);
            }
        }
        None
    }
}

impl<T> Default for PathTrie<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_root_shape() {
        let trie: PathTrie<i32> = PathTrie::new();
        assert_eq!(trie.len(), 1);
        assert!(!trie.is_empty());
        assert_eq!(trie.key(trie.root()), Some(""));
        assert_eq!(trie.parent(trie.root()), None);
        assert_eq!(trie.nested_count(trie.root()), 0);
    }

    #[test]
    fn test_find_or_add_child_is_idempotent() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        let first = trie.find_or_add_child(trie.root(), "com").unwrap();
        let second = trie.find_or_add_child(trie.root(), "com").unwrap();

        assert_eq!(first, second);
        // The repeat lookup must not count again.
        assert_eq!(trie.nested_count(trie.root()), 1);
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_nested_counts_propagate_to_the_root() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        trie.insert_path(["com", "eup", "studio"]).unwrap();
        trie.insert_path(["com", "eup", "core"]).unwrap();

        let com = trie.lookup(["com"]).unwrap();
        let eup = trie.lookup(["com", "eup"]).unwrap();
        let studio = trie.lookup(["com", "eup", "studio"]).unwrap();
        let core = trie.lookup(["com", "eup", "core"]).unwrap();

        assert_eq!(trie.nested_count(trie.root()), 4);
        assert_eq!(trie.nested_count(com), 3);
        assert_eq!(trie.nested_count(eup), 2);
        assert_eq!(trie.nested_count(studio), 0);
        assert_eq!(trie.nested_count(core), 0);
    }

    #[test]
    fn test_shared_prefixes_are_not_duplicated() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        let studio = trie.insert_path(["com", "eup", "studio"]).unwrap();
        let core = trie.insert_path(["com", "eup", "core"]).unwrap();

        assert_ne!(studio, core);
        assert_eq!(trie.parent(studio), trie.parent(core));
        // root + com + eup + studio + core
        assert_eq!(trie.len(), 5);
    }

    #[test]
    fn test_lookup_miss_names_the_segment() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        trie.insert_path(["com", "eup"]).unwrap();

        assert_eq!(
            trie.lookup(["com", "missing", "deeper"]),
            Err(TrieError::KeyNotFound {
                key: "missing".to_string()
            })
        );
    }

    #[test]
    fn test_foreign_id_is_an_error() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        let ghost = TrieId::new(12);
        assert_eq!(
            trie.find_or_add_child(ghost, "x"),
            Err(TrieError::NodeNotFound { id: ghost })
        );
        assert_eq!(trie.set_data(ghost, 1), Err(TrieError::NodeNotFound { id: ghost }));
    }

    #[test]
    fn test_data_round_trip() {
        let mut trie = PathTrie::new();
        let node = trie.insert_path(["a", "b"]).unwrap();

        assert_eq!(trie.data(node), None);
        assert_eq!(trie.set_data(node, 7).unwrap(), None);
        assert_eq!(trie.set_data(node, 8).unwrap(), Some(7));
        assert_eq!(trie.data(node), Some(&8));

        if let Some(value) = trie.data_mut(node) {
            *value += 1;
        }
        assert_eq!(trie.data(node), Some(&9));
    }

    #[test]
    fn test_find_by_data_scans_the_whole_trie() {
        let mut trie = PathTrie::new();
        let studio = trie.insert_path(["com", "eup", "studio"]).unwrap();
        trie.set_data(studio, "ide").unwrap();

        assert_eq!(trie.find_by_data(&"ide"), Some(studio));
        assert_eq!(trie.find_by_data(&"unknown"), None);
    }

    #[test]
    fn test_children_iteration() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        trie.insert_path(["com", "eup"]).unwrap();
        trie.insert_path(["org"]).unwrap();

        let mut keys: Vec<_> = trie.children(trie.root()).map(|(key, _)| key).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["com", "org"]);
    }

    #[test]
    fn test_empty_path_is_the_root() {
        let mut trie: PathTrie<i32> = PathTrie::new();
        let id = trie.insert_path(std::iter::empty::<&str>()).unwrap();
        assert_eq!(id, trie.root());
        assert_eq!(trie.lookup(std::iter::empty::<&str>()), Ok(trie.root()));
    }
}
