//! Error types for `btcrypt`.

use thiserror::Error;

/// Errors produced by the Bluetooth security functions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CryptoError {
    /// A fixed-size argument had the wrong length.
    #[error("{what} must be {expected} bytes, got {actual}")]
    InvalidLength {
        /// Name of the offending argument.
        what: &'static str,
        /// Mandated length.
        expected: usize,
        /// Length supplied by the caller.
        actual: usize,
    },

    /// Input too short to carry the data the operation needs.
    #[error("input of {len} bytes is shorter than the minimum of {min}")]
    InsufficientData {
        /// Length supplied by the caller.
        len: usize,
        /// Minimum accepted length.
        min: usize,
    },

    /// Recomputed signature does not match the one carried in the PDU.
    #[error("signature mismatch")]
    SignatureMismatch,

    /// The block cipher backend failed or disagrees with the AES reference.
    #[error("cipher engine failure: {0}")]
    Engine(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = core::result::Result<T, CryptoError>;
