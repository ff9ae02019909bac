//! AES-based Bluetooth security functions.
//!
//! Every function is a short composition of AES-128 and AES-CMAC:
//! - [`Crypto::h6`]: link key conversion.
//! - [`Crypto::sign_att`] / [`Crypto::verify_att_sign`]: ATT signed writes.
//! - [`Crypto::gatt_hash`]: GATT database hash over scatter-gather input.
//! - [`Crypto::sef`] / [`Crypto::sdf`] / [`Crypto::sih`]: Coordinated Set
//!   Identification.
//! - [`Crypto::e`] / [`Crypto::ah`]: the security function *e* and the random
//!   address hash.
//!
//! Apart from the GATT database hash, inputs and outputs use Bluetooth
//! octet order (least significant octet first).
//!
//! ```
//! use btcrypt::Crypto;
//!
//! let crypto = Crypto::new()?;
//! let csrk = [0x42u8; 16];
//! let signature = crypto.sign_att(&csrk, b"\x12\x34", 7)?;
//!
//! let mut pdu = b"\x12\x34".to_vec();
//! pdu.extend_from_slice(signature.as_bytes());
//! assert!(crypto.verify_att_sign(&csrk, &pdu));
//! # Ok::<(), btcrypt::CryptoError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod att;
mod backend;
mod cmac;
mod context;
mod csis;
pub mod error;
mod gatt;
mod octets;
mod signature;
mod smp;

pub use crate::att::MIN_SIGNED_PDU_LEN;
pub use crate::backend::{BlockCipher, SoftAes};
pub use crate::cmac::{CmacState, TAG_LEN};
pub use crate::context::Crypto;
pub use crate::error::{CryptoError, Result};
pub use crate::signature::{Signature, SIGNATURE_LEN, TRUNCATED_TAG_LEN};
pub use crate::smp::{KEY_ID_BRLE, KEY_ID_LEBR, KEY_ID_TMP1, KEY_ID_TMP2};
pub use btcrypt_aes::Block;
