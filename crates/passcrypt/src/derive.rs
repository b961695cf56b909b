//! Password-to-key-material derivation.
//!
//! Two independent mixing paths leave the verification digest and the cipher
//! schedule computationally unrelated: the digest goes through a two-stage
//! salted hash, the schedule through a self-keyed cipher pass. Possession of
//! one never yields the other without the original password.

use aes_core::{encrypt_block, AesKey, KeySchedule};
use sha1::{Digest, Sha1};

use crate::error::Error;

/// Seed length the self-keying bootstrap operates on; an AES-256 key.
const SEED_LEN: usize = 32;

/// Derives the 32-hex-character verification digest for `password_bytes`.
///
/// `salt = hex(md5(bytes))`, re-salted as `hex(sha1(salt))`, then the final
/// digest is `hex(md5(salt ++ bytes))`. SHA-1 comes from the `sha1` crate;
/// only MD5 is implemented in this workspace.
pub fn password_digest(password_bytes: &[u8]) -> Result<String, Error> {
    let salt = md5_core::digest_hex(password_bytes)?;
    let salt = hex::encode(Sha1::digest(salt.as_bytes()));

    let mut salted = Vec::with_capacity(salt.len() + password_bytes.len());
    salted.extend_from_slice(salt.as_bytes());
    salted.extend_from_slice(password_bytes);
    Ok(md5_core::digest_hex(&salted)?)
}

/// Stretches `password_bytes` into the AES-256 schedule used for every
/// subsequent block operation.
///
/// The password fills (or truncates to) a 32-byte seed. One cipher pass keyed
/// by the raw seed itself encrypts the seed's first half, and that output
/// overwrites both halves of the seed; the returned schedule is the expansion
/// of the rewritten seed. This self-keying bootstrap is the module's key
/// stretch and must not be swapped for a conventional KDF without breaking
/// existing ciphertext.
pub fn derive_schedule(password_bytes: &[u8]) -> KeySchedule {
    let mut seed = [0u8; SEED_LEN];
    let take = password_bytes.len().min(SEED_LEN);
    seed[..take].copy_from_slice(&password_bytes[..take]);

    let bootstrap_key = AesKey::new(&seed).expect("seed is 32 bytes");
    let bootstrap = KeySchedule::expand(&bootstrap_key);

    let mut first_half = [0u8; 16];
    first_half.copy_from_slice(&seed[..16]);
    let mixed = encrypt_block(&first_half, &bootstrap);
    seed[..16].copy_from_slice(&mixed);
    seed[16..].copy_from_slice(&mixed);

    let key = AesKey::new(&seed).expect("seed is 32 bytes");
    KeySchedule::expand(&key)
}
