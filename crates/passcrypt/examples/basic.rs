//! Demonstrates the full façade: digest derivation, encryption, decryption.

use passcrypt::PasswordCipher;

fn main() {
    let cipher = PasswordCipher::new("correct horse battery staple").expect("derive cipher");

    // Stable verification digest; store this instead of the password.
    println!("password digest: {}", cipher.password_digest());

    let wire = cipher
        .encrypt("Attack at dawn — bring the ☃")
        .expect("encrypt");
    println!("wire ciphertext: {wire}");

    let plain = cipher.decrypt(&wire).expect("decrypt");
    println!("decrypted:       {plain}");
    assert_eq!(plain, "Attack at dawn — bring the ☃");

    println!("example succeeded; plaintext survived the round trip");
}
