//! Coordinated Set Identification: SIRK encryption and the set member hash.
//!
//! `sef(K, SIRK) = k1(K, s1("SIRKenc"), "csis") ^ SIRK`, where `s1` and `k1`
//! are the salt and key derivation functions shared with Mesh. Because the
//! keystream only depends on `K`, `sdf` is the same XOR.

use btcrypt_aes::xor;
use zeroize::Zeroize;

use crate::backend::BlockCipher;
use crate::context::Crypto;
use crate::error::Result;
use crate::octets::{fixed, swapped};

const SALT_INPUT: &[u8] = b"SIRKenc";
const KEY_INFO: &[u8] = b"csis";

impl<B: BlockCipher> Crypto<B> {
    /// SIRK encryption function. `K`, `SIRK` and the result are in Bluetooth
    /// octet order.
    pub fn sef(&self, k: &[u8], sirk: &[u8]) -> Result<[u8; 16]> {
        let k = fixed::<16>("K", k)?;
        let sirk = fixed::<16>("SIRK", sirk)?;
        Ok(self.apply_sirk_keystream(&k, &sirk))
    }

    /// SIRK decryption function, the inverse of [`Crypto::sef`].
    pub fn sdf(&self, k: &[u8], enc_sirk: &[u8]) -> Result<[u8; 16]> {
        let k = fixed::<16>("K", k)?;
        let enc_sirk = fixed::<16>("EncSIRK", enc_sirk)?;
        Ok(self.apply_sirk_keystream(&k, &enc_sirk))
    }

    /// Set member identity hash: `sih(k, r) = e(k, r') mod 2^24`.
    pub fn sih(&self, k: &[u8], r: &[u8]) -> Result<[u8; 3]> {
        let k = fixed::<16>("K", k)?;
        let r = fixed::<3>("r", r)?;
        Ok(self.hash24(&k, &r))
    }

    fn apply_sirk_keystream(&self, k: &[u8; 16], input: &[u8; 16]) -> [u8; 16] {
        // s1 and k1 operate on most-significant-octet-first strings.
        let salt = self.cmac_raw(&[0u8; 16], SALT_INPUT);
        let mut t = self.cmac_raw(&salt, &swapped(*k));
        let mut keystream = swapped(self.cmac_raw(&t, KEY_INFO));
        let out = xor(&keystream, input);
        t.zeroize();
        keystream.zeroize();
        out
    }
}
