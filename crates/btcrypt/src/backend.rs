//! Block cipher backends.

use btcrypt_aes::{Aes128, Aes128Key, Block};

use crate::error::{CryptoError, Result};

/// A 128-bit-key, 128-bit-block cipher in the forward direction.
///
/// Keys and blocks are most-significant octet first, exactly as FIPS-197
/// writes them. Implementations must not keep per-call state: the context
/// shares one backend across threads.
pub trait BlockCipher: Send + Sync {
    /// Encrypts `block` under `key`.
    fn encrypt_block(&self, key: &[u8; 16], block: &Block) -> Block;
}

impl<T: BlockCipher + ?Sized> BlockCipher for &T {
    fn encrypt_block(&self, key: &[u8; 16], block: &Block) -> Block {
        (**self).encrypt_block(key, block)
    }
}

impl<T: BlockCipher + ?Sized> BlockCipher for Box<T> {
    fn encrypt_block(&self, key: &[u8; 16], block: &Block) -> Block {
        (**self).encrypt_block(key, block)
    }
}

/// The in-tree software AES-128 engine.
#[derive(Clone, Copy, Debug, Default)]
pub struct SoftAes;

impl BlockCipher for SoftAes {
    fn encrypt_block(&self, key: &[u8; 16], block: &Block) -> Block {
        Aes128::new(&Aes128Key::from(*key)).encrypt_block(block)
    }
}

// FIPS-197 Appendix C.1.
const SELF_TEST_KEY: [u8; 16] = [
    0x00, 0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08, 0x09, 0x0a, 0x0b, 0x0c, 0x0d, 0x0e, 0x0f,
];
const SELF_TEST_PLAIN: Block = [
    0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff,
];
const SELF_TEST_CIPHER: Block = [
    0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5, 0x5a,
];

/// Runs the known-answer test against `backend`.
pub(crate) fn self_test<B: BlockCipher + ?Sized>(backend: &B) -> Result<()> {
    if backend.encrypt_block(&SELF_TEST_KEY, &SELF_TEST_PLAIN) == SELF_TEST_CIPHER {
        Ok(())
    } else {
        Err(CryptoError::Engine(
            "known-answer self test failed".to_string(),
        ))
    }
}
