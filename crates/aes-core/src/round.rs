//! The four round transformations of FIPS-197 section 5.
//!
//! The state is a 4x4 byte matrix stored column-major in a flat 16-byte
//! array: `state[row + 4 * col]`.

use crate::block::{xor_in_place, Block};
use crate::sbox::{INV_SBOX, SBOX};

/// SubBytes: every state byte through the forward S-box.
#[inline]
pub fn sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

/// Inverse SubBytes.
#[inline]
pub fn inv_sub_bytes(state: &mut Block) {
    for byte in state.iter_mut() {
        *byte = INV_SBOX[*byte as usize];
    }
}

/// ShiftRows: row `r` rotated left by `r` positions.
#[inline]
pub fn shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut rotated = [0u8; 4];
        for col in 0..4 {
            rotated[col] = state[row + 4 * ((col + row) % 4)];
        }
        for col in 0..4 {
            state[row + 4 * col] = rotated[col];
        }
    }
}

/// Inverse ShiftRows: row `r` rotated right by `r` positions.
#[inline]
pub fn inv_shift_rows(state: &mut Block) {
    for row in 1..4 {
        let mut rotated = [0u8; 4];
        for col in 0..4 {
            rotated[col] = state[row + 4 * ((col + 4 - row) % 4)];
        }
        for col in 0..4 {
            state[row + 4 * col] = rotated[col];
        }
    }
}

/// Multiplication in GF(2^8) with reduction polynomial 0x11B.
fn gmul(mut a: u8, mut b: u8) -> u8 {
    let mut product = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            product ^= a;
        }
        let carry = a & 0x80;
        a <<= 1;
        if carry != 0 {
            a ^= 0x1b;
        }
        b >>= 1;
    }
    product
}

/// MixColumns: each column multiplied by the fixed polynomial
/// `{03}x^3 + {01}x^2 + {01}x + {02}` over GF(2^8).
#[inline]
pub fn mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 2) ^ gmul(a1, 3) ^ a2 ^ a3;
        col[1] = a0 ^ gmul(a1, 2) ^ gmul(a2, 3) ^ a3;
        col[2] = a0 ^ a1 ^ gmul(a2, 2) ^ gmul(a3, 3);
        col[3] = gmul(a0, 3) ^ a1 ^ a2 ^ gmul(a3, 2);
    }
}

/// Inverse MixColumns with the inverse polynomial `{0b}{0d}{09}{0e}`.
#[inline]
pub fn inv_mix_columns(state: &mut Block) {
    for col in state.chunks_exact_mut(4) {
        let [a0, a1, a2, a3] = [col[0], col[1], col[2], col[3]];
        col[0] = gmul(a0, 0x0e) ^ gmul(a1, 0x0b) ^ gmul(a2, 0x0d) ^ gmul(a3, 0x09);
        col[1] = gmul(a0, 0x09) ^ gmul(a1, 0x0e) ^ gmul(a2, 0x0b) ^ gmul(a3, 0x0d);
        col[2] = gmul(a0, 0x0d) ^ gmul(a1, 0x09) ^ gmul(a2, 0x0e) ^ gmul(a3, 0x0b);
        col[3] = gmul(a0, 0x0b) ^ gmul(a1, 0x0d) ^ gmul(a2, 0x09) ^ gmul(a3, 0x0e);
    }
}

/// AddRoundKey: XOR a round-key slice into the state.
#[inline]
pub fn add_round_key(state: &mut Block, round_key: &Block) {
    xor_in_place(state, round_key);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_rows_inverts() {
        let mut state: Block = core::array::from_fn(|i| i as u8);
        let original = state;
        shift_rows(&mut state);
        assert_ne!(state, original);
        inv_shift_rows(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn mix_columns_inverts() {
        let mut state: Block = core::array::from_fn(|i| (31 * i + 7) as u8);
        let original = state;
        mix_columns(&mut state);
        inv_mix_columns(&mut state);
        assert_eq!(state, original);
    }

    #[test]
    fn gmul_agrees_with_known_products() {
        // 0x57 * 0x83 = 0xc1, the worked example in FIPS-197 section 4.2.
        assert_eq!(gmul(0x57, 0x83), 0xc1);
        assert_eq!(gmul(0x57, 0x13), 0xfe);
        assert_eq!(gmul(0x01, 0xab), 0xab);
        assert_eq!(gmul(0x00, 0xff), 0x00);
    }
}
