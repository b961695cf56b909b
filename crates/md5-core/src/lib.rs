//! MD5 message digest implemented from RFC 1321.
//!
//! One-shot digest over an in-memory message: pad with a single 1 bit and
//! zeros to 448 mod 512 bits, append the bit length as two little-endian
//! 32-bit words, then compress 64-byte blocks through four rounds of sixteen
//! step operations each.
//!
//! MD5 is collision-broken; this crate exists as a non-adversarial mixing
//! primitive, not as a general-purpose secure hash.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod consts;

use thiserror::Error;

use crate::consts::{INIT, S, T};

/// Digest size in bytes.
pub const DIGEST_SIZE: usize = 16;

/// Maximum accepted message length in bytes.
///
/// The bit length must fit a 32-bit word, so messages are capped at 2^29
/// bytes; longer input is rejected rather than silently truncated.
pub const MAX_INPUT_LEN: usize = 1 << 29;

/// Returned when a message exceeds [`MAX_INPUT_LEN`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("message of {0} bytes exceeds the 2^29-byte digest limit")]
pub struct InputTooLongError(pub usize);

/// Computes the MD5 digest of `message`.
pub fn digest(message: &[u8]) -> Result<[u8; DIGEST_SIZE], InputTooLongError> {
    if message.len() >= MAX_INPUT_LEN {
        return Err(InputTooLongError(message.len()));
    }

    let mut state = INIT;
    let mut chunks = message.chunks_exact(64);
    for block in &mut chunks {
        compress(&mut state, block.try_into().expect("chunk length is 64"));
    }

    // Padding: 0x80, zeros to 56 mod 64, then the bit length. A remainder of
    // 56 bytes or more spills into a second final block.
    let remainder = chunks.remainder();
    let mut tail = [0u8; 128];
    tail[..remainder.len()].copy_from_slice(remainder);
    tail[remainder.len()] = 0x80;
    let tail_len = if remainder.len() < 56 { 64 } else { 128 };
    let bit_len = (message.len() as u64) << 3;
    tail[tail_len - 8..tail_len].copy_from_slice(&bit_len.to_le_bytes());
    for block in tail[..tail_len].chunks_exact(64) {
        compress(&mut state, block.try_into().expect("chunk length is 64"));
    }

    let mut out = [0u8; DIGEST_SIZE];
    for (slot, word) in out.chunks_exact_mut(4).zip(state) {
        slot.copy_from_slice(&word.to_le_bytes());
    }
    Ok(out)
}

/// Computes the digest and renders it as 32 lowercase hex characters.
pub fn digest_hex(message: &[u8]) -> Result<String, InputTooLongError> {
    Ok(hex::encode(digest(message)?))
}

/// One 64-byte block through the four rounds of sixteen steps.
fn compress(state: &mut [u32; 4], block: &[u8; 64]) {
    let mut m = [0u32; 16];
    for (word, bytes) in m.iter_mut().zip(block.chunks_exact(4)) {
        *word = u32::from_le_bytes(bytes.try_into().expect("chunk length is four"));
    }

    let [mut a, mut b, mut c, mut d] = *state;

    for step in 0..64 {
        let (mix, msg_idx) = match step / 16 {
            0 => ((b & c) | (!b & d), step),
            1 => ((d & b) | (!d & c), (5 * step + 1) % 16),
            2 => (b ^ c ^ d, (3 * step + 5) % 16),
            _ => (c ^ (b | !d), (7 * step) % 16),
        };
        let rotated = a
            .wrapping_add(mix)
            .wrapping_add(T[step])
            .wrapping_add(m[msg_idx])
            .rotate_left(S[step]);
        let next_b = b.wrapping_add(rotated);
        (a, b, c, d) = (d, next_b, b, c);
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
}
