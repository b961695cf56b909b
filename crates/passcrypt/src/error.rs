//! Error kinds shared across the façade.

use thiserror::Error;

/// Failures surfaced by encryption, decryption, and the codecs.
///
/// Every variant is fatal to the call that raised it; there are no partial
/// results. Callers may retry with corrected input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A hash input exceeded the digest's length ceiling.
    #[error("input too long for the message digest")]
    InvalidInput,

    /// UTF-8 encoding was asked for a code point beyond U+10FFFF.
    #[error("character code {0:#x} is not a valid Unicode code point")]
    InvalidCharacterCode(u32),

    /// UTF-8 decoding hit a malformed or truncated sequence.
    #[error("invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8Sequence {
        /// Offset of the offending byte in the input.
        offset: usize,
    },

    /// Base64 decoding hit a character outside the standard alphabet or an
    /// impossible length.
    #[error("invalid base64 input at offset {offset}")]
    InvalidBase64 {
        /// Offset of the offending character in the input.
        offset: usize,
    },

    /// Decoded ciphertext was shorter than the 8-byte nonce prefix.
    #[error("ciphertext of {0} bytes is too short to carry a nonce")]
    TruncatedCiphertext(usize),
}

impl From<md5_core::InputTooLongError> for Error {
    fn from(_: md5_core::InputTooLongError) -> Self {
        Error::InvalidInput
    }
}
