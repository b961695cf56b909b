//! Single-block encryption and decryption.

use crate::block::Block;
use crate::key::KeySchedule;
use crate::round::{
    add_round_key, inv_mix_columns, inv_shift_rows, inv_sub_bytes, mix_columns, shift_rows,
    sub_bytes,
};

/// Encrypts one 16-byte block (FIPS-197 section 5.1).
///
/// The final round skips MixColumns.
pub fn encrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(0));

    for round in 1..rounds {
        sub_bytes(&mut state);
        shift_rows(&mut state);
        mix_columns(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
    }

    sub_bytes(&mut state);
    shift_rows(&mut state);
    add_round_key(&mut state, schedule.round_key(rounds));

    state
}

/// Decrypts one 16-byte block (FIPS-197 section 5.3).
///
/// Mirrors [`encrypt_block`]: inverse tables, inverse rotation direction, and
/// round keys consumed in reverse order.
pub fn decrypt_block(block: &Block, schedule: &KeySchedule) -> Block {
    let rounds = schedule.rounds();
    let mut state = *block;

    add_round_key(&mut state, schedule.round_key(rounds));

    for round in (1..rounds).rev() {
        inv_shift_rows(&mut state);
        inv_sub_bytes(&mut state);
        add_round_key(&mut state, schedule.round_key(round));
        inv_mix_columns(&mut state);
    }

    inv_shift_rows(&mut state);
    inv_sub_bytes(&mut state);
    add_round_key(&mut state, schedule.round_key(0));

    state
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::key::AesKey;
    use rand::RngCore;

    // FIPS-197 appendix C: the same plaintext under the 16/24/32-byte
    // example keys 000102...
    const PLAIN: Block = [
        0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc, 0xdd, 0xee,
        0xff,
    ];
    const CIPHER_128: Block = [
        0x69, 0xc4, 0xe0, 0xd8, 0x6a, 0x7b, 0x04, 0x30, 0xd8, 0xcd, 0xb7, 0x80, 0x70, 0xb4, 0xc5,
        0x5a,
    ];
    const CIPHER_192: Block = [
        0xdd, 0xa9, 0x7c, 0xa4, 0x86, 0x4c, 0xdf, 0xe0, 0x6e, 0xaf, 0x70, 0xa0, 0xec, 0x0d, 0x71,
        0x91,
    ];
    const CIPHER_256: Block = [
        0x8e, 0xa2, 0xb7, 0xca, 0x51, 0x67, 0x45, 0xbf, 0xea, 0xfc, 0x49, 0x90, 0x4b, 0x49, 0x60,
        0x89,
    ];

    fn sequential_key(len: usize) -> AesKey {
        let bytes: Vec<u8> = (0..len as u8).collect();
        AesKey::new(&bytes).unwrap()
    }

    #[test]
    fn matches_fips_vectors_all_key_sizes() {
        for (len, expected) in [(16, CIPHER_128), (24, CIPHER_192), (32, CIPHER_256)] {
            let schedule = KeySchedule::expand(&sequential_key(len));
            assert_eq!(encrypt_block(&PLAIN, &schedule), expected);
            assert_eq!(decrypt_block(&expected, &schedule), PLAIN);
        }
    }

    #[test]
    fn round_trip_random_blocks_and_keys() {
        let mut rng = rand::thread_rng();
        for key_len in [16usize, 24, 32] {
            for _ in 0..50 {
                let mut key_bytes = vec![0u8; key_len];
                let mut block = [0u8; 16];
                rng.fill_bytes(&mut key_bytes);
                rng.fill_bytes(&mut block);
                let schedule = KeySchedule::expand(&AesKey::new(&key_bytes).unwrap());
                let ct = encrypt_block(&block, &schedule);
                assert_eq!(decrypt_block(&ct, &schedule), block);
            }
        }
    }
}
