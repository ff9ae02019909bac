//! Signed write support for the Attribute Protocol.

use subtle::ConstantTimeEq;
use tracing::debug;

use crate::backend::BlockCipher;
use crate::context::Crypto;
use crate::error::{CryptoError, Result};
use crate::octets::fixed;
use crate::signature::{Signature, SIGNATURE_LEN, TRUNCATED_TAG_LEN};

/// Shortest PDU that can be verified: one payload byte plus the signature.
pub const MIN_SIGNED_PDU_LEN: usize = SIGNATURE_LEN + 1;

impl<B: BlockCipher> Crypto<B> {
    /// Signs `message` with `csrk` under `counter`.
    ///
    /// The MAC input is `message || LE32(counter)`; the 64 most significant
    /// bits of the tag are kept. All octets are in Bluetooth order.
    pub fn sign_att(&self, csrk: &[u8], message: &[u8], counter: u32) -> Result<Signature> {
        let csrk = fixed::<16>("CSRK", csrk)?;
        Ok(self.sign_att_raw(&csrk, message, counter))
    }

    /// Checks the signature trailing `signed_pdu`, reporting why it failed.
    ///
    /// The counter is taken from the signature itself; replay policy belongs
    /// to the caller.
    pub fn check_att_sign(&self, csrk: &[u8], signed_pdu: &[u8]) -> Result<()> {
        if signed_pdu.len() < MIN_SIGNED_PDU_LEN {
            return Err(CryptoError::InsufficientData {
                len: signed_pdu.len(),
                min: MIN_SIGNED_PDU_LEN,
            });
        }
        let csrk = fixed::<16>("CSRK", csrk)?;
        let (message, trailer) = signed_pdu.split_at(signed_pdu.len() - SIGNATURE_LEN);
        let received = Signature::try_from(trailer)?;
        let expected = self.sign_att_raw(&csrk, message, received.counter());
        if bool::from(expected.ct_eq(&received)) {
            Ok(())
        } else {
            Err(CryptoError::SignatureMismatch)
        }
    }

    /// Verifies a signed PDU. Any error counts as not verified.
    pub fn verify_att_sign(&self, csrk: &[u8], signed_pdu: &[u8]) -> bool {
        match self.check_att_sign(csrk, signed_pdu) {
            Ok(()) => true,
            Err(err) => {
                debug!(pdu_len = signed_pdu.len(), %err, "ATT signature rejected");
                false
            }
        }
    }

    fn sign_att_raw(&self, csrk: &[u8; 16], message: &[u8], counter: u32) -> Signature {
        let counter_le = counter.to_le_bytes();
        let tag = self.cmac_le_raw(csrk, &[message, &counter_le]);
        let mut truncated = [0u8; TRUNCATED_TAG_LEN];
        truncated.copy_from_slice(&tag[16 - TRUNCATED_TAG_LEN..]);
        Signature::new(counter, truncated)
    }
}
