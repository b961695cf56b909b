//! Counter-mode stream construction over the block cipher.
//!
//! CTR encryption and decryption are the same XOR against a keystream of
//! encrypted counter values, so only the forward cipher transform is ever
//! invoked.

use aes_core::{encrypt_block, Block, KeySchedule, BLOCK_SIZE};

/// Length of the clock-derived nonce prefixed to every ciphertext.
pub const NONCE_LEN: usize = 8;

/// Builds the initial counter block: the nonce followed by eight zero bytes.
pub fn counter_from_nonce(nonce: &[u8; NONCE_LEN]) -> Block {
    let mut counter = [0u8; BLOCK_SIZE];
    counter[..NONCE_LEN].copy_from_slice(nonce);
    counter
}

/// Applies the CTR keystream to `data` in place.
///
/// Per 16 message bytes: encrypt the counter, step it, XOR the keystream in.
/// The final keystream block may be only partially consumed.
pub fn transform(schedule: &KeySchedule, counter: &mut Block, data: &mut [u8]) {
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let keystream = encrypt_block(counter, schedule);
        increment(counter);
        for (byte, key) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= key;
        }
    }
}

/// Steps the counter as a 128-bit big-endian integer, carrying leftward.
fn increment(counter: &mut Block) {
    for byte in counter.iter_mut().rev() {
        *byte = byte.wrapping_add(1);
        if *byte != 0 {
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aes_core::AesKey;

    fn test_schedule() -> KeySchedule {
        KeySchedule::expand(&AesKey::new(&[7u8; 32]).unwrap())
    }

    #[test]
    fn increment_carries_leftward() {
        let mut counter = [0u8; 16];
        increment(&mut counter);
        assert_eq!(counter[15], 1);

        counter[15] = 0xff;
        increment(&mut counter);
        assert_eq!(&counter[14..], &[1, 0]);

        let mut wrapping = [0xffu8; 16];
        increment(&mut wrapping);
        assert_eq!(wrapping, [0u8; 16]);
    }

    #[test]
    fn transform_is_its_own_inverse() {
        let schedule = test_schedule();
        let nonce = [9u8; NONCE_LEN];
        let original = b"stream cipher over an odd, non-block-aligned length".to_vec();

        let mut data = original.clone();
        let mut counter = counter_from_nonce(&nonce);
        transform(&schedule, &mut counter, &mut data);
        assert_ne!(data, original);

        let mut counter = counter_from_nonce(&nonce);
        transform(&schedule, &mut counter, &mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn keystream_never_uses_the_inverse_cipher() {
        // A one-byte message still consumes a full keystream block and steps
        // the counter exactly once.
        let schedule = test_schedule();
        let mut counter = counter_from_nonce(&[0u8; NONCE_LEN]);
        let mut data = [0x5au8];
        transform(&schedule, &mut counter, &mut data);
        let mut expected = counter_from_nonce(&[0u8; NONCE_LEN]);
        increment(&mut expected);
        assert_eq!(counter, expected);
    }
}
