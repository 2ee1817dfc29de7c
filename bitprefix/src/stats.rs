//! Statistics and introspection for bit prefix tries.
//!
//! Useful for understanding how densely a set of prefixes shares paths, and how much of the
//! node arena is spent on interior chains versus stored prefixes.

use crate::keys::KEY_BITS;
use crate::node::NodeId;
use crate::trie::BitPrefixTrie;

pub trait TrieStatsTrait {
    fn get_trie_stats(&self) -> TrieStats;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrieStats {
    /// Allocated nodes, root included.
    pub num_nodes: usize,
    /// Nodes where a stored prefix ends.
    pub num_terminals: usize,
    /// Nodes with both a 0 and a 1 child.
    pub num_branches: usize,
    /// Nodes with no children.
    pub num_leaves: usize,
    /// Depth of the deepest node.
    pub max_depth: usize,
    /// Stored prefixes counted by length in bits.
    pub terminals_by_len: [usize; KEY_BITS],
}

impl Default for TrieStats {
    fn default() -> Self {
        Self {
            num_nodes: 0,
            num_terminals: 0,
            num_branches: 0,
            num_leaves: 0,
            max_depth: 0,
            terminals_by_len: [0; KEY_BITS],
        }
    }
}

impl TrieStats {
    /// Share of nodes that terminate a prefix.
    pub fn terminal_density(&self) -> f64 {
        if self.num_nodes == 0 {
            return 0.0;
        }
        self.num_terminals as f64 / self.num_nodes as f64
    }
}

impl TrieStatsTrait for BitPrefixTrie {
    fn get_trie_stats(&self) -> TrieStats {
        let mut stats = TrieStats::default();
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.node(id);
            stats.num_nodes += 1;
            stats.max_depth = stats.max_depth.max(depth);
            if node.terminal {
                stats.num_terminals += 1;
                stats.terminals_by_len[node.len as usize] += 1;
            }
            if node.is_leaf() {
                stats.num_leaves += 1;
            } else if node.num_children() == 2 {
                stats.num_branches += 1;
            }
            stack.extend(node.children.iter().flatten().map(|child| (*child, depth + 1)));
        }
        stats
    }
}
