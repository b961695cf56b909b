//! Command-line interface for `passcrypt`.

#![forbid(unsafe_code)]

use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use passcrypt::PasswordCipher;

/// Password-based text encryption CLI.
#[derive(Parser)]
#[command(
    name = "passcrypt",
    version,
    author,
    about = "Encrypt and decrypt text under a password (AES-CTR wire format)"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt text to the base64 wire format.
    Encrypt {
        /// Password to derive the key schedule from.
        #[arg(long, env = "PASSCRYPT_PASSWORD")]
        password: String,
        /// Text to encrypt; reads stdin when omitted.
        text: Option<String>,
        /// Write the ciphertext to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Decrypt base64 wire-format ciphertext back to text.
    Decrypt {
        /// Password the ciphertext was encrypted under.
        #[arg(long, env = "PASSCRYPT_PASSWORD")]
        password: String,
        /// Ciphertext to decrypt; reads stdin when omitted.
        text: Option<String>,
        /// Write the plaintext to a file instead of stdout.
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Print the 32-hex-character verification digest of a password.
    Digest {
        /// Password to digest.
        #[arg(long, env = "PASSCRYPT_PASSWORD")]
        password: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Encrypt {
            password,
            text,
            output,
        } => {
            let cipher = build_cipher(&password)?;
            let plain = read_text(text)?;
            let wire = cipher.encrypt(&plain).context("encrypt text")?;
            write_text(output.as_deref(), &wire)
        }
        Commands::Decrypt {
            password,
            text,
            output,
        } => {
            let cipher = build_cipher(&password)?;
            let wire = read_text(text)?;
            let plain = cipher
                .decrypt(wire.trim_end_matches(['\r', '\n']))
                .context("decrypt ciphertext")?;
            write_text(output.as_deref(), &plain)
        }
        Commands::Digest { password } => {
            let cipher = build_cipher(&password)?;
            println!("{}", cipher.password_digest());
            Ok(())
        }
    }
}

fn build_cipher(password: &str) -> Result<PasswordCipher> {
    PasswordCipher::new(password).context("derive cipher from password")
}

fn read_text(arg: Option<String>) -> Result<String> {
    match arg {
        Some(text) => Ok(text),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("read stdin")?;
            Ok(buffer)
        }
    }
}

fn write_text(output: Option<&std::path::Path>, text: &str) -> Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text).with_context(|| format!("write {}", path.display()))
        }
        None => {
            println!("{text}");
            Ok(())
        }
    }
}
