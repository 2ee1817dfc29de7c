use crate::keys::BitKey;

// A u32 index is plenty: a trie of 31-bit prefixes never needs more nodes than that.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub(crate) struct NodeId(pub(crate) u32);

impl NodeId {
    pub(crate) const ROOT: NodeId = NodeId(0);
}

/// A binary trie node. `children[0]` follows a 0 bit, `children[1]` a 1 bit.
#[derive(Clone, Debug, Default)]
pub(crate) struct TrieNode {
    pub(crate) terminal: bool,
    pub(crate) len: u8,
    pub(crate) value: BitKey,
    pub(crate) children: [Option<NodeId>; 2],
}

impl TrieNode {
    #[inline]
    pub(crate) fn child(&self, bit: u8) -> Option<NodeId> {
        self.children[bit as usize]
    }

    #[inline]
    pub(crate) fn set_child(&mut self, bit: u8, child: NodeId) {
        debug_assert!(self.children[bit as usize].is_none());
        self.children[bit as usize] = Some(child);
    }

    pub(crate) fn zero(&self) -> Option<NodeId> {
        self.children[0]
    }

    pub(crate) fn one(&self) -> Option<NodeId> {
        self.children[1]
    }

    pub(crate) fn is_leaf(&self) -> bool {
        self.children.iter().all(Option::is_none)
    }

    pub(crate) fn num_children(&self) -> usize {
        self.children.iter().filter(|c| c.is_some()).count()
    }

    /// Mark this node as the end of a stored prefix.
    pub(crate) fn terminate(&mut self, value: BitKey, len: u8) {
        self.terminal = true;
        self.value = value;
        self.len = len;
    }
}
