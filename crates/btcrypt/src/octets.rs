//! Length checks and octet-order helpers.
//!
//! Bluetooth carries multi-octet values least-significant octet first; AES and
//! CMAC are specified most-significant octet first. These helpers move values
//! between the two orders.

use crate::error::{CryptoError, Result};

/// Copies `bytes` into a fixed array, rejecting any other length.
pub(crate) fn fixed<const N: usize>(what: &'static str, bytes: &[u8]) -> Result<[u8; N]> {
    bytes.try_into().map_err(|_| CryptoError::InvalidLength {
        what,
        expected: N,
        actual: bytes.len(),
    })
}

/// Returns `value` with its octet order reversed.
#[inline]
pub(crate) fn swapped<const N: usize>(mut value: [u8; N]) -> [u8; N] {
    value.reverse();
    value
}
