//! Password-based text encryption.
//!
//! A [`PasswordCipher`] is built once per password. Construction derives a
//! verification digest (two-stage salted MD5/SHA-1 hash) and an AES-256 key
//! schedule (a self-keyed cipher pass over a password-filled seed); every
//! `encrypt`/`decrypt` afterwards runs the cipher in counter mode over the
//! UTF-8 bytes of the text and carries the 8-byte nonce in the Base64 wire
//! format `base64(nonce ++ ciphertext)`.
//!
//! The scheme preserves an existing wire format: a clock-derived nonce and a
//! single-pass key stretch, not a general-purpose authenticated-encryption
//! design. See the crate-level tests for its exact known-answer vectors.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod base64;
mod cipher;
mod ctr;
mod derive;
mod error;
pub mod utf8;

pub use aes_core::KeySchedule;

pub use crate::cipher::PasswordCipher;
pub use crate::ctr::NONCE_LEN;
pub use crate::derive::{derive_schedule, password_digest};
pub use crate::error::Error;
