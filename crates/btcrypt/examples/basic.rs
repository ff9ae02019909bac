//! Signs an ATT write, verifies it, and hashes a small attribute table.

use btcrypt::Crypto;

fn main() -> Result<(), btcrypt::CryptoError> {
    let crypto = Crypto::new()?;

    let csrk = [
        0x50, 0x5e, 0x42, 0xdf, 0x96, 0x91, 0xec, 0x72, 0xd3, 0x1f, 0xcd, 0xfb, 0xeb, 0x64, 0x1b,
        0x61,
    ];
    let write = [0xd2, 0x12, 0x00, 0x13, 0x37];
    let signature = crypto.sign_att(&csrk, &write, 1)?;

    let mut pdu = write.to_vec();
    pdu.extend_from_slice(signature.as_bytes());
    assert!(crypto.verify_att_sign(&csrk, &pdu));

    let records: [&[u8]; 2] = [&[0x01, 0x00, 0x00, 0x28, 0x00, 0x18], &[0x02, 0x00, 0x03, 0x28]];
    let hash = crypto.gatt_hash(records);

    println!("signature: {:02x?}", signature.as_bytes());
    println!("database hash: {hash:02x?}");
    Ok(())
}
