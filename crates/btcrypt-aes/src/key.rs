//! Key material for AES-128.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block::Block;

/// Size of an AES-128 key in bytes.
pub const KEY_LEN: usize = 16;

/// Number of round keys produced by the AES-128 schedule.
pub const ROUND_KEYS: usize = 11;

/// AES-128 key wrapper. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct Aes128Key(pub(crate) [u8; KEY_LEN]);

impl Aes128Key {
    /// Raw key bytes, most-significant octet first.
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.0
    }
}

impl From<[u8; KEY_LEN]> for Aes128Key {
    fn from(value: [u8; KEY_LEN]) -> Self {
        Self(value)
    }
}

impl core::fmt::Debug for Aes128Key {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("Aes128Key(..)")
    }
}

/// Expanded round keys for AES-128. Wiped on drop.
#[derive(Clone, Zeroize, ZeroizeOnDrop)]
pub struct RoundKeys(pub(crate) [Block; ROUND_KEYS]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}

impl core::fmt::Debug for RoundKeys {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("RoundKeys(..)")
    }
}
