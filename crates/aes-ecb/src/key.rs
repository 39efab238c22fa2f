//! Key types for AES-128.

use crate::block::Block;

/// AES-128 key wrapper.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Aes128Key(pub [u8; 16]);

impl From<[u8; 16]> for Aes128Key {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// The fixed key the original demonstration compiled in.
///
/// Kept as a named constant so the known-answer fixtures and the demo driver
/// reproduce the original ciphertexts; real callers pass their own key to
/// [`crate::AesEcb::new`].
pub const DEMO_KEY: Aes128Key = Aes128Key([
    0x08, 0x01, 0x04, 0x03, 0x04, 0x09, 0x02, 0x07, 0x09, 0x09, 0x0a, 0x0d, 0x01, 0x0d, 0x0e,
    0x0f,
]);

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
