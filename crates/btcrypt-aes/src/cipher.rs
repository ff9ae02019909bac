//! AES-128 key schedule and block encryption.

use crate::block::Block;
use crate::key::{Aes128Key, RoundKeys, ROUND_KEYS};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &Aes128Key) -> RoundKeys {
    let mut round_keys = [[0u8; 16]; ROUND_KEYS];
    round_keys[0] = key.0;

    for round in 1..ROUND_KEYS {
        let prev = round_keys[round - 1];
        let mut word = [prev[13], prev[14], prev[15], prev[12]];
        for byte in word.iter_mut() {
            *byte = sbox(*byte);
        }
        word[0] ^= RCON[round - 1];

        let next = &mut round_keys[round];
        for i in 0..16 {
            let carry = if i < 4 { word[i] } else { next[i - 4] };
            next[i] = prev[i] ^ carry;
        }
    }

    RoundKeys(round_keys)
}

/// Encrypts a single 16-byte block with pre-expanded round keys.
pub fn encrypt_block(block: &Block, round_keys: &RoundKeys) -> Block {
    let mut state = *block;

    add_round_key(&mut state, round_keys.get(0));

    for round in 1..10 {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, round_keys.get(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, round_keys.get(10));

    state
}

/// AES-128 encryptor holding an expanded key schedule.
#[derive(Clone, Debug)]
pub struct Aes128 {
    round_keys: RoundKeys,
}

impl Aes128 {
    /// Runs the key schedule for `key`.
    pub fn new(key: &Aes128Key) -> Self {
        Self {
            round_keys: expand_key(key),
        }
    }

    /// Encrypts one block.
    #[inline]
    pub fn encrypt_block(&self, block: &Block) -> Block {
        encrypt_block(block, &self.round_keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;
    use rand::RngCore;

    const NIST_KEY: [u8; 16] = hex!("000102030405060708090a0b0c0d0e0f");
    const NIST_PLAIN: [u8; 16] = hex!("00112233445566778899aabbccddeeff");
    const NIST_CIPHER: [u8; 16] = hex!("69c4e0d86a7b0430d8cdb78070b4c55a");

    #[test]
    fn encrypt_matches_nist_vector() {
        let key = Aes128Key::from(NIST_KEY);
        let round_keys = expand_key(&key);
        assert_eq!(encrypt_block(&NIST_PLAIN, &round_keys), NIST_CIPHER);
    }

    #[test]
    fn encrypt_matches_appendix_b_vector() {
        let key = Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        let cipher = Aes128::new(&key);
        assert_eq!(
            cipher.encrypt_block(&hex!("3243f6a8885a308d313198a2e0370734")),
            hex!("3925841d02dc09fbdc118597196a0b32")
        );
    }

    #[test]
    fn key_schedule_matches_appendix_a() {
        let key = Aes128Key::from(hex!("2b7e151628aed2a6abf7158809cf4f3c"));
        let round_keys = expand_key(&key);
        assert_eq!(round_keys.get(1), &hex!("a0fafe1788542cb123a339392a6c7605"));
        assert_eq!(round_keys.get(10), &hex!("d014f9a8c9ee2589e13f0cc8b6630ca6"));
    }

    #[test]
    fn zero_key_zero_block() {
        let cipher = Aes128::new(&Aes128Key::from([0u8; 16]));
        assert_eq!(
            cipher.encrypt_block(&[0u8; 16]),
            hex!("66e94bd4ef8a2c3b884cfa59ca342b2e")
        );
    }

    #[test]
    fn cached_schedule_matches_one_shot_random() {
        let mut rng = rand::thread_rng();
        for _ in 0..100 {
            let mut key_bytes = [0u8; 16];
            let mut block = [0u8; 16];
            rng.fill_bytes(&mut key_bytes);
            rng.fill_bytes(&mut block);
            let key = Aes128Key::from(key_bytes);
            let cipher = Aes128::new(&key);
            assert_eq!(cipher.encrypt_block(&block), encrypt_block(&block, &expand_key(&key)));
        }
    }
}
