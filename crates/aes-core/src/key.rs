//! Key and key-schedule types.

use thiserror::Error;

use crate::block::Block;
use crate::sbox::SBOX;

/// Round constants for key expansion. Each entry is double the previous one
/// in GF(2^8) with reduction polynomial 0x11B; AES-128 consumes all ten.
static RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

/// Returned when a key is not 16, 24, or 32 bytes long.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("AES key must be 16, 24, or 32 bytes, got {0}")]
pub struct InvalidKeyLength(pub usize);

/// A validated AES key of 16, 24, or 32 bytes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AesKey {
    bytes: Vec<u8>,
}

impl AesKey {
    /// Wraps raw key material, rejecting unsupported lengths.
    pub fn new(bytes: &[u8]) -> Result<Self, InvalidKeyLength> {
        match bytes.len() {
            16 | 24 | 32 => Ok(Self {
                bytes: bytes.to_vec(),
            }),
            other => Err(InvalidKeyLength(other)),
        }
    }

    /// Key length in 32-bit words (Nk): 4, 6, or 8.
    pub fn words(&self) -> usize {
        self.bytes.len() / 4
    }

    /// Number of cipher rounds for this key size (Nk + 6): 10, 12, or 14.
    pub fn rounds(&self) -> usize {
        self.words() + 6
    }

    /// Raw key bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Expanded round keys, `rounds + 1` slices of 16 bytes each.
///
/// Derived once per key and consumed read-only by both cipher directions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeySchedule {
    round_keys: Vec<Block>,
}

impl KeySchedule {
    /// Runs the FIPS-197 key expansion (section 5.2).
    ///
    /// The first Nk words are the key itself. Every word at a multiple of Nk
    /// mixes in `SubWord(RotWord(prev)) ^ Rcon`; 256-bit keys additionally
    /// apply a plain `SubWord` at the midpoint of each Nk-word stretch; all
    /// other words take the previous word unchanged. Each is then XORed with
    /// the word Nk positions back.
    pub fn expand(key: &AesKey) -> Self {
        let nk = key.words();
        let total = 4 * (key.rounds() + 1);

        let mut words: Vec<[u8; 4]> = Vec::with_capacity(total);
        for chunk in key.as_bytes().chunks_exact(4) {
            words.push([chunk[0], chunk[1], chunk[2], chunk[3]]);
        }

        for i in nk..total {
            let mut temp = words[i - 1];
            if i % nk == 0 {
                temp = sub_word(rot_word(temp));
                temp[0] ^= RCON[i / nk - 1];
            } else if nk > 6 && i % nk == 4 {
                temp = sub_word(temp);
            }
            let prev = words[i - nk];
            words.push([
                prev[0] ^ temp[0],
                prev[1] ^ temp[1],
                prev[2] ^ temp[2],
                prev[3] ^ temp[3],
            ]);
        }

        let round_keys = words
            .chunks_exact(4)
            .map(|quad| {
                let mut rk = [0u8; 16];
                for (slot, word) in rk.chunks_exact_mut(4).zip(quad) {
                    slot.copy_from_slice(word);
                }
                rk
            })
            .collect();

        Self { round_keys }
    }

    /// Number of cipher rounds this schedule supports.
    pub fn rounds(&self) -> usize {
        self.round_keys.len() - 1
    }

    /// Round-key slice for the given round (0..=rounds).
    #[inline]
    pub fn round_key(&self, round: usize) -> &Block {
        &self.round_keys[round]
    }
}

/// Cyclic left rotation by one byte.
fn rot_word(word: [u8; 4]) -> [u8; 4] {
    [word[1], word[2], word[3], word[0]]
}

/// Byte-wise S-box substitution.
fn sub_word(word: [u8; 4]) -> [u8; 4] {
    word.map(|b| SBOX[b as usize])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_unsupported_key_lengths() {
        for len in [0, 1, 15, 17, 23, 25, 31, 33, 64] {
            assert_eq!(AesKey::new(&vec![0u8; len]), Err(InvalidKeyLength(len)));
        }
    }

    #[test]
    fn round_counts_follow_key_size() {
        for (len, rounds) in [(16, 10), (24, 12), (32, 14)] {
            let key = AesKey::new(&vec![0u8; len]).unwrap();
            let schedule = KeySchedule::expand(&key);
            assert_eq!(key.rounds(), rounds);
            assert_eq!(schedule.rounds(), rounds);
        }
    }

    #[test]
    fn expansion_matches_fips_appendix_a1() {
        // FIPS-197 appendix A.1, key 2b7e151628aed2a6abf7158809cf4f3c.
        let key = AesKey::new(&[
            0x2b, 0x7e, 0x15, 0x16, 0x28, 0xae, 0xd2, 0xa6, 0xab, 0xf7, 0x15, 0x88, 0x09, 0xcf,
            0x4f, 0x3c,
        ])
        .unwrap();
        let schedule = KeySchedule::expand(&key);
        assert_eq!(schedule.round_key(0)[..4], [0x2b, 0x7e, 0x15, 0x16]);
        assert_eq!(schedule.round_key(1)[..4], [0xa0, 0xfa, 0xfe, 0x17]);
        assert_eq!(
            schedule.round_key(10)[..],
            [
                0xd0, 0x14, 0xf9, 0xa8, 0xc9, 0xee, 0x25, 0x89, 0xe1, 0x3f, 0x0c, 0xc8, 0xb6, 0x63,
                0x0c, 0xa6,
            ]
        );
    }
}
