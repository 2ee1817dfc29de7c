use std::iter::FusedIterator;

use crate::keys::BitKey;
use crate::node::NodeId;
use crate::trie::BitPrefixTrie;

/// A position in the enumeration of a trie's stored prefixes.
///
/// Obtained from [`BitPrefixTrie::begin`]; a cursor that has run past the last prefix equals
/// [`BitPrefixTrie::end`]. Cursors compare by the node they denote, so any two exhausted
/// cursors are equal.
///
/// The walk is depth-first without recursion: at every node the 1-branch is explored before
/// the 0-branch, and nodes with both branches are stacked so their 0-branch can be resumed
/// once the 1-branch is done.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    trie: Option<&'a BitPrefixTrie>,
    current: Option<NodeId>,
    // Nodes whose 0-branch remains to be explored, nearest ancestor last.
    pending: Vec<NodeId>,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(trie: &'a BitPrefixTrie) -> Self {
        let mut cursor = Self {
            trie: Some(trie),
            current: Some(NodeId::ROOT),
            pending: Vec::with_capacity(crate::MAX_PREFIX_LEN),
        };
        // The root only carries a value for the zero-length prefix.
        if !trie.node(NodeId::ROOT).terminal {
            cursor.forward();
        }
        cursor
    }

    pub(crate) fn end() -> Self {
        Self {
            trie: None,
            current: None,
            pending: Vec::new(),
        }
    }

    pub fn is_end(&self) -> bool {
        self.current.is_none()
    }

    /// Canonical value of the prefix under the cursor, `None` at the end.
    pub fn current_value(&self) -> Option<[u8; 4]> {
        self.current_key().map(BitKey::to_bytes)
    }

    /// Canonical value and length in bits of the prefix under the cursor.
    pub fn current_prefix(&self) -> Option<(BitKey, u8)> {
        let node = self.trie?.node(self.current?);
        Some((node.value, node.len))
    }

    fn current_key(&self) -> Option<BitKey> {
        self.current_prefix().map(|(key, _)| key)
    }

    /// Move to the next stored prefix. Advancing the end cursor leaves it at the end.
    pub fn advance(mut self) -> Self {
        self.step();
        self
    }

    pub(crate) fn step(&mut self) {
        self.forward();
    }

    fn forward(&mut self) {
        let Some(trie) = self.trie else {
            return;
        };

        while let Some(id) = self.current {
            let node = trie.node(id);
            self.current = match (node.one(), node.zero()) {
                (Some(one), Some(_)) => {
                    self.pending.push(id);
                    Some(one)
                }
                (Some(one), None) => Some(one),
                (None, Some(zero)) => Some(zero),
                (None, None) => self.pending.pop().and_then(|p| trie.node(p).zero()),
            };

            if let Some(next) = self.current {
                if trie.node(next).terminal {
                    break;
                }
            }
        }
    }
}

impl PartialEq for Cursor<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.current, other.current) {
            (None, None) => true,
            (Some(a), Some(b)) => {
                a == b
                    && match (self.trie, other.trie) {
                        (Some(x), Some(y)) => std::ptr::eq(x, y),
                        _ => false,
                    }
            }
            _ => false,
        }
    }
}

impl Eq for Cursor<'_> {}

/// Iterator over the canonical values of a trie's stored prefixes.
pub struct Iter<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Iter<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }
}

impl Iterator for Iter<'_> {
    type Item = [u8; 4];

    fn next(&mut self) -> Option<Self::Item> {
        let value = self.cursor.current_value()?;
        self.cursor.step();
        Some(value)
    }
}

impl FusedIterator for Iter<'_> {}

/// Iterator over `(value, length)` of a trie's stored prefixes.
pub struct Prefixes<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Prefixes<'a> {
    pub(crate) fn new(cursor: Cursor<'a>) -> Self {
        Self { cursor }
    }
}

impl Iterator for Prefixes<'_> {
    type Item = (BitKey, u8);

    fn next(&mut self) -> Option<Self::Item> {
        let prefix = self.cursor.current_prefix()?;
        self.cursor.step();
        Some(prefix)
    }
}

impl FusedIterator for Prefixes<'_> {}
