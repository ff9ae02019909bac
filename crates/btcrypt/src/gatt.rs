//! GATT database hash.

use crate::backend::BlockCipher;
use crate::cmac::{cmac, TAG_LEN};
use crate::context::Crypto;

/// The database hash is keyed with all zeros.
const DB_HASH_KEY: [u8; 16] = [0u8; 16];

impl<B: BlockCipher> Crypto<B> {
    /// `AES-CMAC_0(fragments)`: hash over the serialized attribute table.
    ///
    /// Fragments are hashed as if concatenated and may be any length. Unlike
    /// the other functions here, the octets are used exactly as stored.
    pub fn gatt_hash<I, F>(&self, fragments: I) -> [u8; TAG_LEN]
    where
        I: IntoIterator<Item = F>,
        F: AsRef<[u8]>,
    {
        cmac(self.backend(), &DB_HASH_KEY, fragments)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hex_literal::hex;

    #[test]
    fn empty_table() {
        let crypto = Crypto::new().unwrap();
        let none: [&[u8]; 0] = [];
        assert_eq!(
            crypto.gatt_hash(none),
            crypto.cmac(&DB_HASH_KEY, &[]).unwrap()
        );
    }

    #[test]
    fn owned_fragments_are_accepted() {
        let crypto = Crypto::new().unwrap();
        let records: Vec<Vec<u8>> = vec![hex!("0100002800180200").to_vec(), vec![0x03, 0x28]];
        let joined = hex!("01000028001802000328");
        assert_eq!(crypto.gatt_hash(&records), crypto.gatt_hash([joined]));
    }
}
