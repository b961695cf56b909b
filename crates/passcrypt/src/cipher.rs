//! The password encryption façade.

use std::time::{SystemTime, UNIX_EPOCH};

use aes_core::KeySchedule;

use crate::base64;
use crate::ctr::{self, NONCE_LEN};
use crate::derive::{derive_schedule, password_digest};
use crate::error::Error;
use crate::utf8;

/// Bundles a password with its verification digest and cipher schedule.
///
/// Construction derives both once; afterwards the instance is immutable and
/// every `encrypt`/`decrypt` call only reads the schedule, so instances can
/// be shared freely across threads.
pub struct PasswordCipher {
    password: String,
    digest: String,
    schedule: KeySchedule,
}

impl PasswordCipher {
    /// Derives the digest and key schedule for `password`.
    pub fn new(password: &str) -> Result<Self, Error> {
        let password_bytes = utf8::encode(password);
        Ok(Self {
            password: password.to_owned(),
            digest: password_digest(&password_bytes)?,
            schedule: derive_schedule(&password_bytes),
        })
    }

    /// The password this instance was built from.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// The 32-hex-character verification digest.
    ///
    /// Intended only for equality comparison against a stored digest; it is
    /// derived through a different mixing path than the key schedule.
    pub fn password_digest(&self) -> &str {
        &self.digest
    }

    /// Encrypts `plain_text` under a clock-derived nonce.
    ///
    /// Returns `base64(nonce ++ ciphertext)`. The nonce is fresh per call but
    /// not guaranteed unique within one clock millisecond; callers with a
    /// stricter threat model should use [`PasswordCipher::encrypt_with_nonce`]
    /// and their own nonce source.
    pub fn encrypt(&self, plain_text: &str) -> Result<String, Error> {
        self.encrypt_with_nonce(plain_text, clock_nonce())
    }

    /// Encrypts `plain_text` under a caller-supplied nonce.
    pub fn encrypt_with_nonce(
        &self,
        plain_text: &str,
        nonce: [u8; NONCE_LEN],
    ) -> Result<String, Error> {
        let mut data = utf8::encode(plain_text);
        let mut counter = ctr::counter_from_nonce(&nonce);
        ctr::transform(&self.schedule, &mut counter, &mut data);

        let mut wire = Vec::with_capacity(NONCE_LEN + data.len());
        wire.extend_from_slice(&nonce);
        wire.extend_from_slice(&data);
        Ok(base64::encode(&wire))
    }

    /// Decrypts the output of [`PasswordCipher::encrypt`].
    ///
    /// Malformed input propagates as a decode error; there is no best-effort
    /// plaintext.
    pub fn decrypt(&self, cipher_text: &str) -> Result<String, Error> {
        let wire = base64::decode(cipher_text)?;
        if wire.len() < NONCE_LEN {
            return Err(Error::TruncatedCiphertext(wire.len()));
        }
        let (nonce, ciphertext) = wire.split_at(NONCE_LEN);

        let mut counter = ctr::counter_from_nonce(nonce.try_into().expect("nonce is 8 bytes"));
        let mut data = ciphertext.to_vec();
        ctr::transform(&self.schedule, &mut counter, &mut data);
        utf8::decode(&data)
    }
}

/// Builds the 8-byte nonce from wall-clock time: big-endian epoch seconds,
/// then the low byte of the millisecond-within-second value repeated four
/// times.
fn clock_nonce() -> [u8; NONCE_LEN] {
    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default();
    let mut nonce = [0u8; NONCE_LEN];
    nonce[..4].copy_from_slice(&(now.as_secs() as u32).to_be_bytes());
    nonce[4..].fill(now.subsec_millis() as u8);
    nonce
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_known_answer() {
        // Fixed nonce so the full base64 wire format is deterministic.
        let cipher = PasswordCipher::new("secret").unwrap();
        let nonce = [0x68, 0x3a, 0x5d, 0x20, 0x7b, 0x7b, 0x7b, 0x7b];
        let wire = cipher
            .encrypt_with_nonce("The quick brown fox jumps over the lazy dog", nonce)
            .unwrap();
        assert_eq!(
            wire,
            "aDpdIHt7e3t50vJjZ2nNpSeba3LNtSGAsyMxUTysEhmsRhMk2BWG4GGmeAcRxwy2SAng"
        );
        assert_eq!(
            cipher.decrypt(&wire).unwrap(),
            "The quick brown fox jumps over the lazy dog"
        );
    }

    #[test]
    fn wire_format_known_answer_long_password_unicode_text() {
        let cipher = PasswordCipher::new("correct horse battery staple xxxxxxxxxx").unwrap();
        let wire = cipher
            .encrypt_with_nonce("héllo wörld ☃ 𝄞", [0, 1, 2, 3, 4, 5, 6, 7])
            .unwrap();
        assert_eq!(wire, "AAECAwQFBgdVS/RucqXbz1SoY1m4JGehXnbNvp3T");
        assert_eq!(cipher.decrypt(&wire).unwrap(), "héllo wörld ☃ 𝄞");
    }

    #[test]
    fn distinct_nonces_distinct_ciphertext_same_plaintext() {
        let cipher = PasswordCipher::new("secret").unwrap();
        let first = cipher.encrypt_with_nonce("same message", [1; 8]).unwrap();
        let second = cipher.encrypt_with_nonce("same message", [2; 8]).unwrap();
        assert_ne!(first, second);
        assert_eq!(cipher.decrypt(&first).unwrap(), "same message");
        assert_eq!(cipher.decrypt(&second).unwrap(), "same message");
    }

    #[test]
    fn truncated_wire_is_rejected() {
        let cipher = PasswordCipher::new("secret").unwrap();
        // Six bytes decoded: shorter than the nonce prefix.
        assert_eq!(
            cipher.decrypt("AAAAAAAA"),
            Err(Error::TruncatedCiphertext(6))
        );
        assert!(matches!(
            cipher.decrypt("not base64!"),
            Err(Error::InvalidBase64 { .. })
        ));
    }

    #[test]
    fn wrong_password_fails_or_garbles() {
        let cipher = PasswordCipher::new("secret").unwrap();
        let other = PasswordCipher::new("Secret").unwrap();
        let wire = cipher.encrypt_with_nonce("attack at dawn", [5; 8]).unwrap();
        match other.decrypt(&wire) {
            Ok(text) => assert_ne!(text, "attack at dawn"),
            Err(err) => assert!(matches!(err, Error::InvalidUtf8Sequence { .. })),
        }
    }

    #[test]
    fn clock_nonce_layout() {
        let nonce = clock_nonce();
        // Millisecond byte repeated across the second half.
        assert!(nonce[5..].iter().all(|&b| b == nonce[4]));
    }
}
