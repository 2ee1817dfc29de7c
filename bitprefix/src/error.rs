//! Error types for bitprefix operations.

use thiserror::Error;

/// Result type alias for trie operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by [`crate::BitPrefixTrie`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The requested prefix length is outside `[0, MAX_PREFIX_LEN]`.
    #[error("invalid prefix length: {size} (must be at most 31)")]
    InvalidArgument { size: u16 },

    /// A prefix already terminates at the target path.
    #[error("prefix already exists")]
    AlreadyExists,

    /// A trie node could not be allocated.
    #[error("out of memory while allocating trie node")]
    OutOfMemory,
}
