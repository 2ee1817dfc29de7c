use std::ops::{Index, IndexMut};

use crate::error::{Error, Result};
use crate::node::{NodeId, TrieNode};

/// Owning store for every node of a trie, addressed by [`NodeId`].
///
/// Nodes are never removed, so unlike a slot map there is no free list: an id stays valid for
/// the lifetime of the arena and the whole graph is released in one pass when it is dropped.
/// Growth goes through `try_reserve`, so allocation failure surfaces as [`Error::OutOfMemory`]
/// instead of aborting.
#[derive(Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
    limit: Option<usize>,
}

impl NodeArena {
    /// Create an arena holding only the (non-terminal) root node at [`NodeId::ROOT`].
    /// The root always counts against `limit`.
    pub(crate) fn with_root(capacity: usize, limit: Option<usize>) -> Self {
        let capacity = match limit {
            Some(limit) => capacity.min(limit),
            None => capacity,
        };
        let mut nodes = Vec::with_capacity(capacity.max(1));
        nodes.push(TrieNode::default());
        Self { nodes, limit }
    }

    pub(crate) fn try_add(&mut self, node: TrieNode) -> Result<NodeId> {
        if self.limit.is_some_and(|limit| self.nodes.len() >= limit) {
            return Err(Error::OutOfMemory);
        }
        self.nodes.try_reserve(1).map_err(|_| Error::OutOfMemory)?;
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        Ok(id)
    }

    pub(crate) fn len(&self) -> usize {
        self.nodes.len()
    }
}

impl Index<NodeId> for NodeArena {
    type Output = TrieNode;

    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.0 as usize]
    }
}

impl IndexMut<NodeId> for NodeArena {
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.0 as usize]
    }
}
