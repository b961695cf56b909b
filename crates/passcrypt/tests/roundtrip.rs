//! End-to-end round trips through the public façade.

use passcrypt::{Error, PasswordCipher};

#[test]
fn every_password_and_plaintext_round_trips() {
    let passwords = [
        "",
        "a",
        "hunter2",
        "pässwörd with ümlauts",
        "a password much longer than the thirty-two byte seed it fills",
    ];
    let plaintexts = [
        "",
        "x",
        "exactly sixteen!",
        "one byte more....",
        "The quick brown fox jumps over the lazy dog",
        "multi-byte: héllo ☃ 𝄞 — and back again",
    ];
    for password in passwords {
        let cipher = PasswordCipher::new(password).unwrap();
        for plaintext in plaintexts {
            let wire = cipher.encrypt(plaintext).unwrap();
            assert_eq!(cipher.decrypt(&wire).unwrap(), plaintext, "password {password:?}");
        }
    }
}

#[test]
fn clock_nonces_decrypt_under_a_fresh_instance() {
    let wire = PasswordCipher::new("shared secret")
        .unwrap()
        .encrypt("message for later")
        .unwrap();
    // A second instance of the same password derives the same schedule.
    let later = PasswordCipher::new("shared secret").unwrap();
    assert_eq!(later.decrypt(&wire).unwrap(), "message for later");
}

#[test]
fn clock_ticks_freshen_the_nonce() {
    let cipher = PasswordCipher::new("secret").unwrap();
    let first = cipher.encrypt("identical plaintext").unwrap();
    // Cross a millisecond boundary so the nonce's subsecond bytes move.
    std::thread::sleep(std::time::Duration::from_millis(3));
    let second = cipher.encrypt("identical plaintext").unwrap();
    assert_ne!(first, second);
    assert_eq!(cipher.decrypt(&first).unwrap(), "identical plaintext");
    assert_eq!(cipher.decrypt(&second).unwrap(), "identical plaintext");
}

#[test]
fn digests_are_stable_across_instances() {
    let first = PasswordCipher::new("stable").unwrap();
    let second = PasswordCipher::new("stable").unwrap();
    assert_eq!(first.password_digest(), second.password_digest());
    assert_eq!(first.password(), "stable");
    assert_ne!(
        PasswordCipher::new("other").unwrap().password_digest(),
        first.password_digest()
    );
}

#[test]
fn tampered_ciphertext_never_yields_silent_success() {
    let cipher = PasswordCipher::new("secret").unwrap();
    let wire = cipher.encrypt_with_nonce("attack at dawn", [3; 8]).unwrap();
    let truncated = &wire[..wire.len() - 4];
    match cipher.decrypt(truncated) {
        Ok(text) => assert_ne!(text, "attack at dawn"),
        Err(err) => assert!(matches!(
            err,
            Error::InvalidBase64 { .. }
                | Error::InvalidUtf8Sequence { .. }
                | Error::TruncatedCiphertext(_)
        )),
    }
}
