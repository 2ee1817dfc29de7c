//! Canonical key representation.
//!
//! Values enter the trie as host-order `u32`s and are stored in big-endian byte order, so that
//! bit position `i` (counted from the most significant bit) always lives in byte `i / 8` under
//! mask `0x80 >> (i % 8)`, whatever the host endianness.

/// Number of addressable bit positions in a key.
pub const KEY_BITS: usize = 32;

/// A 32-bit value in canonical (big-endian) form.
///
/// ```rust
/// use bitprefix::BitKey;
///
/// let key = BitKey::from(0xD180_0000u32);
/// assert_eq!(key.as_bytes(), &[0xD1, 0x80, 0x00, 0x00]);
/// assert_eq!(key.bit(0), 1);
/// assert_eq!(key.bit(2), 0);
/// assert_eq!(u32::from(key), 0xD180_0000);
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Default, Debug)]
pub struct BitKey([u8; 4]);

impl BitKey {
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 4] {
        &self.0
    }

    pub fn to_bytes(self) -> [u8; 4] {
        self.0
    }

    pub fn to_u32(self) -> u32 {
        u32::from_be_bytes(self.0)
    }

    /// The bit at position `pos` (0 is the most significant bit), as 0 or 1.
    #[inline]
    pub fn bit(&self, pos: usize) -> u8 {
        debug_assert!(pos < KEY_BITS, "bit position out of range");
        let mask = 0x80u8 >> (pos % 8);
        (self.0[pos / 8] & mask != 0) as u8
    }

    /// Whether the first `len` bits of `self` and `other` agree.
    pub fn shares_prefix(&self, other: &BitKey, len: usize) -> bool {
        (0..len.min(KEY_BITS)).all(|pos| self.bit(pos) == other.bit(pos))
    }
}

impl From<u32> for BitKey {
    fn from(value: u32) -> Self {
        Self(value.to_be_bytes())
    }
}

impl From<[u8; 4]> for BitKey {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<BitKey> for u32 {
    fn from(key: BitKey) -> Self {
        key.to_u32()
    }
}

impl From<BitKey> for [u8; 4] {
    fn from(key: BitKey) -> Self {
        key.0
    }
}

impl AsRef<[u8]> for BitKey {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}
