//! AES block cipher implemented from the FIPS-197 specification.
//!
//! Supports all three standard key sizes (128/192/256 bits, 10/12/14
//! rounds) over the fixed 16-byte block. Provides:
//! - Key validation and key-schedule expansion.
//! - Single-block encryption and decryption.
//!
//! The implementation aims for clarity and testability rather than
//! constant-time guarantees; it should not be treated as side-channel
//! hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::{xor_in_place, Block, BLOCK_SIZE};
pub use crate::cipher::{decrypt_block, encrypt_block};
pub use crate::key::{AesKey, InvalidKeyLength, KeySchedule};
