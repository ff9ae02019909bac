//! Signed-write signature: sign counter followed by a truncated CMAC tag.

use subtle::{Choice, ConstantTimeEq};

use crate::error::{CryptoError, Result};

/// Length of an ATT signature.
pub const SIGNATURE_LEN: usize = 12;

/// Length of the truncated tag carried in a signature.
pub const TRUNCATED_TAG_LEN: usize = 8;

/// `LE32(counter) || tag`, as appended to a signed write PDU.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Signature([u8; SIGNATURE_LEN]);

impl Signature {
    /// Assembles a signature from its parts.
    pub fn new(counter: u32, tag: [u8; TRUNCATED_TAG_LEN]) -> Self {
        let mut bytes = [0u8; SIGNATURE_LEN];
        bytes[..4].copy_from_slice(&counter.to_le_bytes());
        bytes[4..].copy_from_slice(&tag);
        Self(bytes)
    }

    /// The sign counter bound into this signature.
    pub fn counter(&self) -> u32 {
        u32::from_le_bytes([self.0[0], self.0[1], self.0[2], self.0[3]])
    }

    /// The truncated CMAC tag.
    pub fn tag(&self) -> [u8; TRUNCATED_TAG_LEN] {
        let mut tag = [0u8; TRUNCATED_TAG_LEN];
        tag.copy_from_slice(&self.0[4..]);
        tag
    }

    /// Wire bytes.
    pub fn as_bytes(&self) -> &[u8; SIGNATURE_LEN] {
        &self.0
    }
}

impl ConstantTimeEq for Signature {
    fn ct_eq(&self, other: &Self) -> Choice {
        self.0[..].ct_eq(&other.0[..])
    }
}

impl From<[u8; SIGNATURE_LEN]> for Signature {
    fn from(bytes: [u8; SIGNATURE_LEN]) -> Self {
        Self(bytes)
    }
}

impl From<Signature> for [u8; SIGNATURE_LEN] {
    fn from(signature: Signature) -> Self {
        signature.0
    }
}

impl TryFrom<&[u8]> for Signature {
    type Error = CryptoError;

    fn try_from(bytes: &[u8]) -> Result<Self> {
        crate::octets::fixed("signature", bytes).map(Self)
    }
}

impl AsRef<[u8]> for Signature {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl core::fmt::Debug for Signature {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Signature")
            .field("counter", &self.counter())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn parts_round_trip_through_wire_layout() {
        let sig = Signature::new(1, hex!("f1871e933c900ff2"));
        assert_eq!(sig.as_bytes(), &hex!("01000000f1871e933c900ff2"));
        assert_eq!(sig.counter(), 1);
        assert_eq!(sig.tag(), hex!("f1871e933c900ff2"));
    }

    #[test]
    fn counter_is_little_endian() {
        let sig = Signature::from(hex!("7856341200000000000000ff"));
        assert_eq!(sig.counter(), 0x1234_5678);
    }

    #[test]
    fn constant_time_equality() {
        let a = Signature::new(5, [0xaa; 8]);
        let mut b = a.0;
        b[11] ^= 1;
        assert!(bool::from(a.ct_eq(&a)));
        assert!(!bool::from(a.ct_eq(&Signature::from(b))));
    }

    #[test]
    fn try_from_checks_length() {
        assert!(Signature::try_from(&[0u8; 11][..]).is_err());
        assert!(Signature::try_from(&[0u8; 12][..]).is_ok());
    }
}
