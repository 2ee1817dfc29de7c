//! Construction-time tuning for [`crate::BitPrefixTrie`].

/// Default number of node slots reserved up front.
pub const DEFAULT_INITIAL_CAPACITY: usize = 32;

/// Options applied when a trie is created.
///
/// ```rust
/// use bitprefix::{BitPrefixTrie, TrieConfig};
///
/// let config = TrieConfig::default().initial_capacity(256).node_limit(1024);
/// let trie = BitPrefixTrie::with_config(config);
/// assert!(trie.is_empty());
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TrieConfig {
    /// Node slots reserved when the trie is built.
    pub initial_capacity: usize,
    /// Upper bound on the number of nodes, root included. Inserts that would exceed it fail
    /// with [`crate::Error::OutOfMemory`].
    pub node_limit: Option<usize>,
}

impl Default for TrieConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_INITIAL_CAPACITY,
            node_limit: None,
        }
    }
}

impl TrieConfig {
    pub fn initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }

    pub fn node_limit(mut self, limit: usize) -> Self {
        self.node_limit = Some(limit);
        self
    }
}
