//! The crypto context: a block cipher backend plus the generic primitives
//! every Bluetooth security function is composed from.

use btcrypt_aes::Block;
use tracing::{debug, trace};

use crate::backend::{self_test, BlockCipher, SoftAes};
use crate::cmac::{cmac, CmacState, TAG_LEN};
use crate::error::Result;
use crate::octets::{fixed, swapped};

/// Reusable handle for the Bluetooth security functions.
///
/// Holds only the cipher backend; keys travel with each call, so a single
/// context can be shared by reference across threads. Dropping it releases
/// the backend.
pub struct Crypto<B: BlockCipher = SoftAes> {
    backend: B,
}

impl Crypto<SoftAes> {
    /// Creates a context over the software AES engine.
    pub fn new() -> Result<Self> {
        Self::with_backend(SoftAes)
    }
}

impl<B: BlockCipher> Crypto<B> {
    /// Creates a context over `backend` after checking it against a
    /// FIPS-197 known answer.
    pub fn with_backend(backend: B) -> Result<Self> {
        if let Err(err) = self_test(&backend) {
            debug!(backend = core::any::type_name::<B>(), %err, "cipher backend rejected");
            return Err(err);
        }
        debug!(backend = core::any::type_name::<B>(), "crypto context ready");
        Ok(Self { backend })
    }

    /// The cipher backend this context was built with.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// AES-128 encryption of one block, most-significant octet first.
    pub fn encrypt_block(&self, key: &[u8], block: &[u8]) -> Result<Block> {
        let key = fixed::<16>("key", key)?;
        let block = fixed::<16>("block", block)?;
        Ok(self.backend.encrypt_block(&key, &block))
    }

    /// Bluetooth security function *e*.
    ///
    /// Same cipher as [`Crypto::encrypt_block`], but key, plaintext and result
    /// are all least-significant octet first, as they appear on air.
    pub fn e(&self, key: &[u8], plaintext: &[u8]) -> Result<Block> {
        let key = fixed::<16>("key", key)?;
        let plaintext = fixed::<16>("plaintext", plaintext)?;
        Ok(self.e_raw(&key, &plaintext))
    }

    /// RFC 4493 AES-CMAC of `message`, most-significant octet first.
    pub fn cmac(&self, key: &[u8], message: &[u8]) -> Result<[u8; TAG_LEN]> {
        self.cmac_fragments(key, [message])
    }

    /// AES-CMAC over the concatenation of `fragments`.
    pub fn cmac_fragments<I, F>(&self, key: &[u8], fragments: I) -> Result<[u8; TAG_LEN]>
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        let key = fixed::<16>("key", key)?;
        Ok(cmac(&self.backend, &key, fragments))
    }

    /// AES-CMAC with key, message and tag all least-significant octet first.
    pub fn cmac_le(&self, key: &[u8], message: &[u8]) -> Result<[u8; TAG_LEN]> {
        let key = fixed::<16>("key", key)?;
        Ok(self.cmac_le_raw(&key, &[message]))
    }

    /// Starts an incremental CMAC keyed by `key` (most-significant octet first).
    pub fn cmac_state(&self, key: &[u8; 16]) -> CmacState<'_, B> {
        CmacState::new(&self.backend, key)
    }

    pub(crate) fn e_raw(&self, key: &[u8; 16], plaintext: &Block) -> Block {
        swapped(self.backend.encrypt_block(&swapped(*key), &swapped(*plaintext)))
    }

    pub(crate) fn cmac_raw(&self, key: &[u8; 16], message: &[u8]) -> [u8; TAG_LEN] {
        cmac(&self.backend, key, [message])
    }

    /// CMAC of `parts` concatenated, everything least-significant octet first.
    ///
    /// Reversing the concatenation means walking the parts back to front and
    /// reversing each one.
    pub(crate) fn cmac_le_raw(&self, key: &[u8; 16], parts: &[&[u8]]) -> [u8; TAG_LEN] {
        let mut state = CmacState::new(&self.backend, &swapped(*key));
        for part in parts.iter().rev() {
            state.update_reversed(part);
        }
        swapped(state.finalize())
    }
}

impl<B: BlockCipher> Drop for Crypto<B> {
    fn drop(&mut self) {
        trace!("crypto context released");
    }
}

impl<B: BlockCipher> core::fmt::Debug for Crypto<B> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Crypto")
            .field("backend", &core::any::type_name::<B>())
            .finish()
    }
}
