//! AES-CMAC (RFC 4493 / NIST SP 800-38B) over a pluggable block cipher.
//!
//! [`CmacState`] is incremental: bytes arrive through any number of
//! [`CmacState::update`] calls and only the final, possibly partial, block is
//! held back until [`CmacState::finalize`] decides between the K1 and K2
//! branches. Fragment boundaries therefore never affect the tag.

use btcrypt_aes::{xor_in_place, Block, BLOCK_LEN};
use zeroize::Zeroize;

use crate::backend::BlockCipher;

/// Length of a full CMAC tag.
pub const TAG_LEN: usize = 16;

/// `R_128`: the reduction constant for doubling in GF(2^128).
const RB: u8 = 0x87;

/// Doubles `block` in GF(2^128): shift left one bit, fold the carry with `RB`.
pub(crate) fn dbl(block: &Block) -> Block {
    let mut out = [0u8; BLOCK_LEN];
    let mut carry = 0u8;
    for i in (0..BLOCK_LEN).rev() {
        out[i] = (block[i] << 1) | carry;
        carry = block[i] >> 7;
    }
    // 0x00 or 0xff without branching on the secret bit.
    out[BLOCK_LEN - 1] ^= RB & carry.wrapping_neg();
    out
}

/// Derives the K1 and K2 subkeys from `key`.
pub(crate) fn subkeys<B: BlockCipher + ?Sized>(cipher: &B, key: &[u8; 16]) -> (Block, Block) {
    let l = cipher.encrypt_block(key, &[0u8; BLOCK_LEN]);
    let k1 = dbl(&l);
    let k2 = dbl(&k1);
    (k1, k2)
}

/// Running CMAC computation.
pub struct CmacState<'a, B: BlockCipher + ?Sized> {
    cipher: &'a B,
    key: [u8; 16],
    k1: Block,
    k2: Block,
    acc: Block,
    pending: Block,
    pending_len: usize,
}

impl<'a, B: BlockCipher + ?Sized> CmacState<'a, B> {
    /// Starts a computation keyed by `key` (most-significant octet first).
    pub fn new(cipher: &'a B, key: &[u8; 16]) -> Self {
        let (k1, k2) = subkeys(cipher, key);
        Self {
            cipher,
            key: *key,
            k1,
            k2,
            acc: [0u8; BLOCK_LEN],
            pending: [0u8; BLOCK_LEN],
            pending_len: 0,
        }
    }

    /// Absorbs `data`.
    pub fn update(&mut self, mut data: &[u8]) {
        while !data.is_empty() {
            // A full pending block is only chained once more input proves it
            // is not the last one.
            if self.pending_len == BLOCK_LEN {
                self.chain_pending();
            }
            let take = (BLOCK_LEN - self.pending_len).min(data.len());
            self.pending[self.pending_len..self.pending_len + take].copy_from_slice(&data[..take]);
            self.pending_len += take;
            data = &data[take..];
        }
    }

    /// Absorbs `data` with its octet order reversed, without copying it whole.
    pub fn update_reversed(&mut self, data: &[u8]) {
        let mut scratch = [0u8; BLOCK_LEN];
        for chunk in data.rchunks(BLOCK_LEN) {
            for (dst, src) in scratch.iter_mut().zip(chunk.iter().rev()) {
                *dst = *src;
            }
            self.update(&scratch[..chunk.len()]);
        }
        scratch.zeroize();
    }

    /// Completes the computation and returns the 16-byte tag.
    pub fn finalize(self) -> [u8; TAG_LEN] {
        let mut last = self.pending;
        if self.pending_len == BLOCK_LEN {
            xor_in_place(&mut last, &self.k1);
        } else {
            last[self.pending_len] = 0x80;
            last[self.pending_len + 1..].fill(0);
            xor_in_place(&mut last, &self.k2);
        }
        xor_in_place(&mut last, &self.acc);
        let tag = self.cipher.encrypt_block(&self.key, &last);
        last.zeroize();
        tag
    }

    fn chain_pending(&mut self) {
        xor_in_place(&mut self.acc, &self.pending);
        self.acc = self.cipher.encrypt_block(&self.key, &self.acc);
        self.pending_len = 0;
    }
}

impl<B: BlockCipher + ?Sized> Drop for CmacState<'_, B> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.k1.zeroize();
        self.k2.zeroize();
        self.acc.zeroize();
        self.pending.zeroize();
    }
}

impl<B: BlockCipher + ?Sized> core::fmt::Debug for CmacState<'_, B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("CmacState")
            .field("pending_len", &self.pending_len)
            .finish_non_exhaustive()
    }
}

/// One-shot CMAC over the concatenation of `fragments`.
pub fn cmac<B, I, F>(cipher: &B, key: &[u8; 16], fragments: I) -> [u8; TAG_LEN]
where
    B: BlockCipher + ?Sized,
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let mut state = CmacState::new(cipher, key);
    for fragment in fragments {
        state.update(fragment.as_ref());
    }
    state.finalize()
}
