//! Path-segment trie index
//!
//! A tree keyed by arbitrary string segments (not single characters) for
//! hierarchical key lookup, carrying on every node an aggregate count of the
//! descendants ever created beneath it. Typical keys are package paths,
//! breadcrumb trails and directory paths.
//!
//! # Example
//!
//! ```
//! use path_trie::PathTrie;
//!
//! let mut trie: PathTrie<()> = PathTrie::new();
//! trie.insert_path(["com", "eup", "studio"]).unwrap();
//! trie.insert_path(["com", "eup", "core"]).unwrap();
//!
//! let eup = trie.lookup(["com", "eup"]).unwrap();
//! assert_eq!(trie.nested_count(eup), 2);
//! assert_eq!(trie.nested_count(trie.root()), 4);
//! ```

mod trie;

pub use trie::{PathTrie, TrieError, TrieId};
