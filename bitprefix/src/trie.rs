//! Binary prefix trie.
//!
//! This module contains [`BitPrefixTrie`], the container that stores bit-string prefixes of
//! 32-bit values and answers shortest-prefix match queries against them.

use log::{debug, trace};

use crate::arena::NodeArena;
use crate::config::TrieConfig;
use crate::error::{Error, Result};
use crate::iter::{Cursor, Iter, Prefixes};
use crate::keys::{BitKey, KEY_BITS};
use crate::node::{NodeId, TrieNode};
use crate::MAX_PREFIX_LEN;

/// A binary trie of bit-string prefixes drawn from a 32-bit universe.
///
/// Each stored prefix is a `(value, size)` pair: the top `size` bits of `value`, with `size` in
/// `[0, MAX_PREFIX_LEN]`. Bits are consumed most significant first, one trie level per bit.
///
/// ## Examples
///
/// ```rust
/// use bitprefix::{BitPrefixTrie, Error};
///
/// let mut trie = BitPrefixTrie::new();
/// trie.insert(0xC0A8_0000, 16).unwrap();
///
/// assert!(trie.matches(0xC0A8_0101));
/// assert!(!trie.matches(0x0A00_0001));
/// assert_eq!(trie.insert(0xC0A8_FFFF, 16), Err(Error::AlreadyExists));
/// assert_eq!(trie.insert(0, 32), Err(Error::InvalidArgument { size: 32 }));
/// ```
///
/// Iteration yields the canonical (big-endian) value stored with each prefix, exploring the
/// 1-branch of every node before its 0-branch:
///
/// ```rust
/// use bitprefix::BitPrefixTrie;
///
/// let mut trie = BitPrefixTrie::new();
/// trie.insert(0xD000_0000, 8).unwrap();
/// trie.insert(0xD180_0000, 9).unwrap();
/// trie.insert(0xD100_0000, 9).unwrap();
///
/// let values: Vec<[u8; 4]> = trie.iter().collect();
/// assert_eq!(
///     values,
///     vec![[0xD1, 0x80, 0, 0], [0xD1, 0x00, 0, 0], [0xD0, 0x00, 0, 0]]
/// );
/// ```
#[derive(Debug)]
pub struct BitPrefixTrie {
    nodes: NodeArena,
    len: usize,
}

impl Default for BitPrefixTrie {
    fn default() -> Self {
        Self::new()
    }
}

impl BitPrefixTrie {
    /// Create an empty trie with the default configuration.
    pub fn new() -> Self {
        Self::with_config(TrieConfig::default())
    }

    /// Create an empty trie with the given configuration.
    pub fn with_config(config: TrieConfig) -> Self {
        Self {
            nodes: NodeArena::with_root(config.initial_capacity, config.node_limit),
            len: 0,
        }
    }

    /// Insert the top `size` bits of `value` (host byte order).
    ///
    /// # Errors
    ///
    /// - [`Error::InvalidArgument`] if `size > MAX_PREFIX_LEN`.
    /// - [`Error::AlreadyExists`] if the same prefix is already stored.
    /// - [`Error::OutOfMemory`] if a node could not be allocated. Nodes created before the
    ///   failure stay in the trie, unterminated; there is no rollback.
    #[inline]
    pub fn insert(&mut self, value: u32, size: u16) -> Result<()> {
        self.insert_key(BitKey::from(value), size)
    }

    /// Insert the top `size` bits of an already canonical key.
    pub fn insert_key(&mut self, key: BitKey, size: u16) -> Result<()> {
        if size as usize > MAX_PREFIX_LEN {
            debug!("rejecting prefix of {size} bits");
            return Err(Error::InvalidArgument { size });
        }
        let size = size as usize;

        // Walk the existing path as far as it goes.
        let mut node = NodeId::ROOT;
        let mut depth = 0;
        while depth < size {
            match self.nodes[node].child(key.bit(depth)) {
                Some(child) => {
                    node = child;
                    depth += 1;
                }
                None => break,
            }
        }

        if depth == size {
            if self.nodes[node].terminal {
                debug!("prefix {:08x}/{size} already stored", key.to_u32());
                return Err(Error::AlreadyExists);
            }
        } else {
            trace!(
                "extending {:08x}/{size} from depth {depth}",
                key.to_u32()
            );
            // Each new node is linked before the next one is allocated, so a failure part way
            // leaves a valid, unterminated chain behind.
            while depth < size {
                let child = self.nodes.try_add(TrieNode::default()).inspect_err(|_| {
                    debug!("node allocation failed at depth {depth}");
                })?;
                self.nodes[node].set_child(key.bit(depth), child);
                node = child;
                depth += 1;
            }
        }

        self.nodes[node].terminate(key, size as u8);
        self.len += 1;
        Ok(())
    }

    /// Whether some stored prefix is a prefix of `value` (host byte order).
    ///
    /// Traversal stops at the first terminal node on the path, so the shortest stored prefix
    /// decides the outcome.
    #[inline]
    pub fn matches(&self, value: u32) -> bool {
        self.matches_key(&BitKey::from(value))
    }

    /// [`matches`](Self::matches) for an already canonical key.
    pub fn matches_key(&self, key: &BitKey) -> bool {
        let mut node = NodeId::ROOT;
        for depth in 0..KEY_BITS {
            if self.nodes[node].terminal {
                return true;
            }
            match self.nodes[node].child(key.bit(depth)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Whether exactly the prefix `(value, size)` is stored.
    pub fn contains(&self, value: u32, size: u16) -> bool {
        let size = size as usize;
        if size > MAX_PREFIX_LEN {
            return false;
        }
        let key = BitKey::from(value);
        let mut node = NodeId::ROOT;
        for depth in 0..size {
            match self.nodes[node].child(key.bit(depth)) {
                Some(child) => node = child,
                None => return false,
            }
        }
        self.nodes[node].terminal
    }

    /// Cursor on the first stored prefix, or equal to [`end`](Self::end) if the trie is empty.
    pub fn begin(&self) -> Cursor<'_> {
        Cursor::new(self)
    }

    /// The past-the-end cursor.
    pub fn end(&self) -> Cursor<'_> {
        Cursor::end()
    }

    /// Iterate over the canonical values of all stored prefixes.
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self.begin())
    }

    /// Iterate over `(value, length)` for all stored prefixes, in the same order as
    /// [`iter`](Self::iter).
    pub fn prefixes(&self) -> Prefixes<'_> {
        Prefixes::new(self.begin())
    }

    /// Number of stored prefixes.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub(crate) fn node(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id]
    }
}

impl<'a> IntoIterator for &'a BitPrefixTrie {
    type Item = [u8; 4];
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use rand::{rng, Rng};

    use crate::config::TrieConfig;
    use crate::error::Error;
    use crate::keys::BitKey;
    use crate::trie::BitPrefixTrie;

    #[test]
    fn test_insert_then_match() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0xD000_0000, 8).unwrap();
        assert!(trie.matches(0xD000_0000));
        assert!(trie.matches(0xD0FF_FFFF));
        assert!(!trie.matches(0xD100_0000));
        assert!(!trie.matches(0x0000_0000));
        assert_eq!(trie.len(), 1);
        assert_eq!(trie.node_count(), 9);
    }

    #[test]
    fn test_duplicate_insert() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0xAB00_0000, 8).unwrap();
        let nodes = trie.node_count();
        assert_eq!(trie.insert(0xAB00_0000, 8), Err(Error::AlreadyExists));
        // Low bits beyond the prefix length don't make it a different prefix.
        assert_eq!(trie.insert(0xABCD_EF01, 8), Err(Error::AlreadyExists));
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
        let values: Vec<_> = trie.iter().collect();
        assert_eq!(values, vec![[0xAB, 0, 0, 0]]);
    }

    #[test]
    fn test_invalid_size() {
        let mut trie = BitPrefixTrie::new();
        assert_eq!(
            trie.insert(0x1234_5678, 32),
            Err(Error::InvalidArgument { size: 32 })
        );
        assert_eq!(
            trie.insert(0x1234_5678, u16::MAX),
            Err(Error::InvalidArgument { size: u16::MAX })
        );
        assert!(trie.is_empty());
        assert_eq!(trie.node_count(), 1);
        assert!(trie.begin() == trie.end());

        trie.insert(0x1234_5678, 31).unwrap();
        assert!(trie.matches(0x1234_5678));
        assert!(trie.matches(0x1234_5679));
        assert!(!trie.matches(0x1234_567A));
    }

    #[test]
    fn test_shorter_prefix_on_existing_path() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0xD180_0000, 16).unwrap();
        let nodes = trie.node_count();

        // The 8 bit prefix lies on the existing path: no new nodes, descendants kept.
        trie.insert(0xD100_0000, 8).unwrap();
        assert_eq!(trie.node_count(), nodes);
        assert!(trie.contains(0xD100_0000, 8));
        assert!(trie.contains(0xD180_0000, 16));
        assert!(trie.matches(0xD1FF_0000));
        assert_eq!(trie.len(), 2);
    }

    #[test]
    fn test_shortest_prefix_wins() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0x0A00_0000, 8).unwrap();
        trie.insert(0x0A0B_0000, 16).unwrap();
        assert!(trie.matches(0x0A0B_0C0D));
        assert!(trie.matches(0x0AFF_0000));
        assert!(!trie.matches(0x0B0B_0000));
    }

    #[test]
    fn test_empty_prefix_matches_everything() {
        let mut trie = BitPrefixTrie::new();
        assert!(!trie.matches(0));
        trie.insert(0xFFFF_FFFF, 0).unwrap();
        assert!(trie.matches(0));
        assert!(trie.matches(u32::MAX));
        assert!(trie.contains(0, 0));
        assert_eq!(trie.insert(0, 0), Err(Error::AlreadyExists));
        assert_eq!(trie.node_count(), 1);

        trie.insert(0x8000_0000, 1).unwrap();
        let values: Vec<_> = trie.iter().collect();
        assert_eq!(values, vec![[0xFF, 0xFF, 0xFF, 0xFF], [0x80, 0, 0, 0]]);
    }

    #[test]
    fn test_contains() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0xC000_0000, 2).unwrap();
        assert!(trie.contains(0xC000_0000, 2));
        assert!(trie.contains(0xFFFF_FFFF, 2));
        assert!(!trie.contains(0xC000_0000, 1));
        assert!(!trie.contains(0xC000_0000, 3));
        assert!(!trie.contains(0xC000_0000, 32));
    }

    #[test]
    fn test_out_of_memory_is_not_rolled_back() {
        // Root plus four nodes.
        let mut trie = BitPrefixTrie::with_config(TrieConfig::default().node_limit(5));
        assert_eq!(trie.insert(0xF000_0000, 8), Err(Error::OutOfMemory));
        assert_eq!(trie.node_count(), 5);
        assert!(trie.is_empty());
        assert!(!trie.matches(0xF000_0000));
        assert!(trie.begin() == trie.end());

        // A prefix living on the partial chain needs no allocation.
        trie.insert(0xF000_0000, 4).unwrap();
        assert!(trie.matches(0xF000_0000));
        assert_eq!(trie.node_count(), 5);

        assert_eq!(trie.insert(0x0000_0000, 1), Err(Error::OutOfMemory));
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_match_is_pure() {
        let mut trie = BitPrefixTrie::new();
        trie.insert(0x7F00_0000, 8).unwrap();
        let nodes = trie.node_count();
        for _ in 0..10 {
            assert!(trie.matches(0x7F00_0001));
            assert!(!trie.matches(0x8000_0000));
        }
        assert_eq!(trie.node_count(), nodes);
        assert_eq!(trie.len(), 1);
    }

    #[test]
    fn test_key_entry_points() {
        let mut trie = BitPrefixTrie::new();
        let key = BitKey::new([0xC0, 0xA8, 0x01, 0x00]);
        trie.insert_key(key, 24).unwrap();
        assert!(trie.matches_key(&BitKey::new([0xC0, 0xA8, 0x01, 0x2A])));
        assert!(trie.matches(0xC0A8_01FE));
        assert_eq!(trie.insert(0xC0A8_0100, 24), Err(Error::AlreadyExists));
    }

    fn naive_matches(stored: &BTreeSet<(u32, u16)>, value: u32) -> bool {
        stored
            .iter()
            .any(|(v, s)| BitKey::from(*v).shares_prefix(&BitKey::from(value), *s as usize))
    }

    fn mask(value: u32, size: u16) -> u32 {
        if size == 0 {
            0
        } else {
            value & (u32::MAX << (32 - size as u32))
        }
    }

    #[test]
    fn test_random_against_model() {
        let mut trie = BitPrefixTrie::new();
        let mut rng = rng();
        // Keyed on the masked value so that two inserts of the same prefix collide.
        let mut stored = BTreeSet::new();
        for _ in 0..2000 {
            let value: u32 = rng.random();
            let size: u16 = rng.random_range(8..=20);
            let fresh = stored.insert((mask(value, size), size));
            let result = trie.insert(value, size);
            if fresh {
                assert_eq!(result, Ok(()));
            } else {
                assert_eq!(result, Err(Error::AlreadyExists));
            }
        }
        assert_eq!(trie.len(), stored.len());
        assert_eq!(trie.iter().count(), stored.len());

        for (value, size) in &stored {
            assert!(trie.contains(*value, *size));
            assert!(trie.matches(*value));
        }
        for _ in 0..2000 {
            let probe: u32 = rng.random();
            assert_eq!(trie.matches(probe), naive_matches(&stored, probe), "{probe:08x}");
        }
    }
}
