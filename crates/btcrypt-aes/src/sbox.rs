//! AES S-box, built at compile time from the GF(2^8) inverse and affine map.

/// Multiplies two field elements modulo `x^8 + x^4 + x^3 + x + 1`.
pub(crate) const fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        a = xtime(a);
        b >>= 1;
    }
    product
}

/// Multiplies by `x` (0x02) in GF(2^8).
#[inline]
pub(crate) const fn xtime(byte: u8) -> u8 {
    (byte << 1) ^ (((byte >> 7) & 1) * 0x1b)
}

/// Multiplicative inverse via `a^254`; zero maps to zero.
const fn gf_inv(a: u8) -> u8 {
    let mut result = 1u8;
    let mut base = a;
    let mut exp = 254u8;
    while exp != 0 {
        if exp & 1 != 0 {
            result = gf_mul(result, base);
        }
        base = gf_mul(base, base);
        exp >>= 1;
    }
    result
}

const fn build() -> [u8; 256] {
    let mut table = [0u8; 256];
    let mut i = 0;
    while i < 256 {
        let b = gf_inv(i as u8);
        table[i] = b
            ^ b.rotate_left(1)
            ^ b.rotate_left(2)
            ^ b.rotate_left(3)
            ^ b.rotate_left(4)
            ^ 0x63;
        i += 1;
    }
    table
}

static SBOX: [u8; 256] = build();

/// Forward S-box lookup.
#[inline]
pub(crate) fn sbox(byte: u8) -> u8 {
    SBOX[usize::from(byte)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_entries() {
        assert_eq!(sbox(0x00), 0x63);
        assert_eq!(sbox(0x01), 0x7c);
        assert_eq!(sbox(0x53), 0xed);
        assert_eq!(sbox(0xff), 0x16);
    }

    #[test]
    fn is_a_permutation() {
        let mut seen = [false; 256];
        for i in 0..=255u8 {
            let s = sbox(i);
            assert!(!seen[usize::from(s)], "duplicate output {s:#04x}");
            seen[usize::from(s)] = true;
        }
    }

    #[test]
    fn field_multiplication() {
        // FIPS-197 section 4.2: {57} * {83} = {c1}
        assert_eq!(gf_mul(0x57, 0x83), 0xc1);
        assert_eq!(gf_mul(0x57, 0x13), 0xfe);
        assert_eq!(xtime(0x8e), 0x07);
    }
}
