//! Software AES-128 used by the Bluetooth security functions in `btcrypt`.
//!
//! This crate follows FIPS-197 and provides:
//! - Key schedule for AES-128.
//! - Single-block encryption. Every Bluetooth function built on top only ever
//!   encrypts, so no inverse cipher is provided.
//! - Key types that wipe themselves on drop.
//!
//! The S-box is a table lookup; the implementation is not hardened against
//! cache-timing side channels.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor, xor_in_place, Block, BLOCK_LEN};
pub use crate::cipher::{encrypt_block, expand_key, Aes128};
pub use crate::key::{Aes128Key, RoundKeys, KEY_LEN};
