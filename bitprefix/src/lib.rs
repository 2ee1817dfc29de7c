//! # bitprefix
//!
//! A binary trie of bit-string prefixes over a 32-bit universe.
//!
//! Prefixes are the top `0..=31` bits of a `u32`. The trie answers two questions:
//!
//! - whether an exact prefix is already stored ([`BitPrefixTrie::insert`] reports
//!   [`Error::AlreadyExists`], [`BitPrefixTrie::contains`] asks without inserting);
//! - whether any stored prefix is a prefix of a given value ([`BitPrefixTrie::matches`]),
//!   decided by the shortest stored prefix on the value's path.
//!
//! Stored prefixes can be enumerated with [`BitPrefixTrie::iter`] or walked with a
//! [`Cursor`] from [`BitPrefixTrie::begin`] to [`BitPrefixTrie::end`].
//!
//! ```rust
//! use bitprefix::BitPrefixTrie;
//!
//! let mut trie = BitPrefixTrie::new();
//! trie.insert(0x0A00_0000, 8)?;
//! assert!(trie.matches(0x0A01_0203));
//! # Ok::<(), bitprefix::Error>(())
//! ```

mod arena;
pub mod config;
mod error;
pub mod iter;
pub mod keys;
mod node;
pub mod stats;
pub mod trie;

pub use config::TrieConfig;
pub use error::{Error, Result};
pub use iter::{Cursor, Iter, Prefixes};
pub use keys::BitKey;
pub use stats::{TrieStats, TrieStatsTrait};
pub use trie::BitPrefixTrie;

/// Longest prefix, in bits, the trie accepts.
pub const MAX_PREFIX_LEN: usize = 31;
