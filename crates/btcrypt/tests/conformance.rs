//! Published sample data for every function, end to end through the
//! public API.

use btcrypt::{Crypto, CryptoError, KEY_ID_LEBR};
use hex_literal::hex;

const RFC_KEY_LE: [u8; 16] = hex!("3c4fcf098815f7aba6d2ae2816157e2b");
const RFC_MSG: [u8; 64] = hex!(
    "6bc1bee22e409f96e93d7e117393172a"
    "ae2d8a571e03ac9c9eb76fac45af8e51"
    "30c81c46a35ce411e5fbc1191a0a52ef"
    "f69f2445df4f9b17ad2b417be66c3710"
);

fn crypto() -> Crypto {
    Crypto::new().expect("software backend passes its self test")
}

#[test]
fn h6_vector() {
    let res = crypto()
        .h6(&hex!("9b7d390aa610103405adc857a33402ec"), &hex!("7262656c"))
        .unwrap();
    assert_eq!(res, hex!("9963b180e2a9d3e81cc96de702e19a2d"));
    assert_eq!(KEY_ID_LEBR, hex!("7262656c"));
}

#[test]
fn sign_att_vectors() {
    let crypto = crypto();
    let cases: [(&[u8], [u8; 12]); 4] = [
        (&RFC_MSG[..0], hex!("00000000b3a8594127ebc2c0")),
        (&RFC_MSG[..16], hex!("00000000273974f4392a232a")),
        (&RFC_MSG[..40], hex!("00000000b7ca94ab87c78218")),
        (&RFC_MSG[..64], hex!("0000000044e1e6ce1df51368")),
    ];
    for (message, expected) in cases {
        let sig = crypto.sign_att(&RFC_KEY_LE, message, 0).unwrap();
        assert_eq!(sig.as_bytes(), &expected, "message of {} bytes", message.len());
    }

    let sig = crypto
        .sign_att(
            &hex!("505e42df9691ec72d31fcdfbeb641b61"),
            &hex!("d212001337"),
            1,
        )
        .unwrap();
    assert_eq!(sig.as_bytes(), &hex!("01000000f1871e933c900ff2"));
    assert_eq!(sig.counter(), 1);
}

#[test]
fn verify_att_sign_vectors() {
    let crypto = crypto();
    let key = hex!("505e42df9691ec72d31fcdfbeb641b61");
    assert!(crypto.verify_att_sign(&key, &hex!("d21200133701000000f1871e933c900ff2")));
    assert!(!crypto.verify_att_sign(&key, &hex!("d21200133701000000f1871e933c900ff1")));
    assert!(!crypto.verify_att_sign(&key, &hex!("d212001337")));
    assert!(!crypto.verify_att_sign(&[0u8; 16], &hex!("d212001337")));
}

#[test]
fn gatt_hash_vector() {
    let m: [[u8; 16]; 7] = [
        hex!("0100002800180200 03280a0300002a04"),
        hex!("000328020500012a 0600002801180700"),
        hex!("0328200800052a09 0002290a0003280a"),
        hex!("0b00292b0c000328 020d002a2b0e0000"),
        hex!("2808180f00022814 0016000f18100003"),
        hex!("28a21100182a1200 0229130000290000"),
        hex!("140001280f181500 0328021600192a00"),
    ];
    let fragments: Vec<&[u8]> = m
        .iter()
        .enumerate()
        .map(|(i, record)| if i == 6 { &record[..15] } else { &record[..] })
        .collect();
    assert_eq!(
        crypto().gatt_hash(&fragments),
        hex!("f1ca2d48ecf58bac8a8830bbb9fba990")
    );

    let joined = fragments.concat();
    assert_eq!(joined.len(), 111);
    assert_eq!(crypto().gatt_hash([&joined]), hex!("f1ca2d48ecf58bac8a8830bbb9fba990"));
}

#[test]
fn sef_vector() {
    let res = crypto()
        .sef(
            &hex!("d9cee53c22c61e066f6948d49b1b6e67"),
            &hex!("cdcc72dd868ccdce22fda121097d7d45"),
        )
        .unwrap();
    assert_eq!(res, hex!("46d35ff2d562257ea02435e135380a17"));
}

#[test]
fn sih_vector() {
    let res = crypto()
        .sih(&hex!("cdcc72dd868ccdce22fda121097d7d45"), &hex!("63f569"))
        .unwrap();
    assert_eq!(res, hex!("da4819"));
}

#[test]
fn cmac_padding_branches_differ() {
    let crypto = crypto();
    let key = [0x11u8; 16];
    // An empty message pads to 80 00..00 under K2; a full block of exactly
    // those bytes goes through K1 instead.
    let mut padding_block = [0u8; 16];
    padding_block[0] = 0x80;
    assert_ne!(
        crypto.cmac(&key, &[]).unwrap(),
        crypto.cmac(&key, &padding_block).unwrap()
    );
}

#[test]
fn results_are_deterministic() {
    let a = crypto();
    let b = crypto();
    let key = [0x5au8; 16];
    assert_eq!(
        a.sign_att(&key, b"payload", 9).unwrap(),
        b.sign_att(&key, b"payload", 9).unwrap()
    );
    assert_eq!(a.gatt_hash([b"abc"]), b.gatt_hash([b"abc"]));
    assert_eq!(a.h6(&key, b"tmp1").unwrap(), b.h6(&key, b"tmp1").unwrap());
}

#[test]
fn shared_across_threads() {
    let crypto = crypto();
    let key = hex!("505e42df9691ec72d31fcdfbeb641b61");
    let pdu = hex!("d21200133701000000f1871e933c900ff2");
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| crypto.verify_att_sign(&key, &pdu)))
            .collect();
        for handle in handles {
            assert!(handle.join().unwrap());
        }
    });
}

#[test]
fn failures_carry_their_class() {
    let crypto = crypto();
    assert!(matches!(
        crypto.h6(&[0u8; 16], &[0u8; 3]),
        Err(CryptoError::InvalidLength { what: "keyID", .. })
    ));
    assert!(matches!(
        crypto.check_att_sign(&[0u8; 16], &[0u8; 12]),
        Err(CryptoError::InsufficientData { len: 12, min: 13 })
    ));
}
