//! AES round transformations over a column-major state.

use crate::block::{xor_in_place, Block};
use crate::sbox::{sbox, xtime};

/// Source index for each output byte of ShiftRows.
const SHIFT_ROWS: [usize; 16] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Applies SubBytes to the state in place.
#[inline]
pub(crate) fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = sbox(*byte);
    }
}

/// Rotates row `r` left by `r` positions.
#[inline]
pub(crate) fn shift_rows(state: &mut Block) {
    let src = *state;
    for (dst, &from) in state.iter_mut().zip(SHIFT_ROWS.iter()) {
        *dst = src[from];
    }
}

/// MixColumns over all four columns.
#[inline]
pub(crate) fn mix_columns(state: &mut Block) {
    for column in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [column[0], column[1], column[2], column[3]];
        let all = a0 ^ a1 ^ a2 ^ a3;
        column[0] = a0 ^ all ^ xtime(a0 ^ a1);
        column[1] = a1 ^ all ^ xtime(a1 ^ a2);
        column[2] = a2 ^ all ^ xtime(a2 ^ a3);
        column[3] = a3 ^ all ^ xtime(a3 ^ a0);
    }
}

/// Adds (XORs) a round key into the state.
#[inline]
pub(crate) fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}
