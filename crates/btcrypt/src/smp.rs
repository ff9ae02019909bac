//! Security Manager functions: `h6` key diversification and the 24-bit
//! random address hash `ah`.

use crate::backend::BlockCipher;
use crate::context::Crypto;
use crate::error::Result;
use crate::octets::fixed;

/// Key ID turning an LE LTK into an intermediate BR/EDR key.
pub const KEY_ID_TMP1: [u8; 4] = 0x746d_7031u32.to_le_bytes();
/// Key ID turning the intermediate key into a BR/EDR link key.
pub const KEY_ID_LEBR: [u8; 4] = 0x6c65_6272u32.to_le_bytes();
/// Key ID turning a BR/EDR link key into an intermediate LE key.
pub const KEY_ID_TMP2: [u8; 4] = 0x746d_7032u32.to_le_bytes();
/// Key ID turning the intermediate key into an LE LTK.
pub const KEY_ID_BRLE: [u8; 4] = 0x6272_6c65u32.to_le_bytes();

impl<B: BlockCipher> Crypto<B> {
    /// Link key conversion function `h6(W, keyID) = AES-CMAC_W(keyID)`.
    ///
    /// `W` and `keyID` are in Bluetooth octet order; see the `KEY_ID_*`
    /// constants for the key IDs defined by the Bluetooth Core.
    pub fn h6(&self, w: &[u8], key_id: &[u8]) -> Result<[u8; 16]> {
        let w = fixed::<16>("W", w)?;
        let key_id = fixed::<4>("keyID", key_id)?;
        Ok(self.cmac_le_raw(&w, &[&key_id]))
    }

    /// Random address hash `ah(k, r) = e(k, r') mod 2^24`, with `r'` being
    /// `r` zero-extended to 128 bits.
    pub fn ah(&self, irk: &[u8], prand: &[u8]) -> Result<[u8; 3]> {
        let irk = fixed::<16>("IRK", irk)?;
        let prand = fixed::<3>("prand", prand)?;
        Ok(self.hash24(&irk, &prand))
    }

    pub(crate) fn hash24(&self, key: &[u8; 16], r: &[u8; 3]) -> [u8; 3] {
        let mut padded = [0u8; 16];
        padded[..3].copy_from_slice(r);
        let out = self.e_raw(key, &padded);
        [out[0], out[1], out[2]]
    }
}
