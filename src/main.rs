// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `crack` - encrypt, decrypt and crack classical substitution ciphers.
//!
//! Encrypt/decrypt subcommands operate over the uppercase range `A..=Z`
//! (out-of-range characters pass through unchanged); the crack subcommands
//! read a ciphertext file and run the statistical search.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use cipher_search::cipher::{
    shift_decode, shift_encode, vigenere_decrypt, vigenere_encrypt, CharRange, VigenereKey,
};
use cipher_search::crack::{self, MAX_KEY_LENGTH};
use cipher_search::report::Reporter;
use cipher_search::validate;

#[derive(Parser)]
#[command(
    name = "crack",
    about = "Encrypt, decrypt and crack Caesar and Vigenère ciphers"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Encrypt a message with a Caesar shift over A-Z
    CaesarEncrypt { key: i64, message: String },
    /// Decrypt a message with a Caesar shift over A-Z
    CaesarDecrypt { key: i64, message: String },
    /// Encrypt a message with a repeating Vigenère key
    VigenereEncrypt { key: String, message: String },
    /// Decrypt a message with a repeating Vigenère key
    VigenereDecrypt { key: String, message: String },
    /// Brute-force a Caesar ciphertext read from a file
    CrackCaesar { ciphertext_file: PathBuf },
    /// Exhaustively search Vigenère keys for a ciphertext read from a file
    CrackVigenere {
        ciphertext_file: PathBuf,
        /// Longest key length to try (1..=10)
        #[arg(long, default_value_t = MAX_KEY_LENGTH)]
        max_key_length: usize,
    },
}

/// Parse and range-check a Caesar key from the command line.
fn caesar_key(key: i64, range: CharRange) -> Result<i32> {
    let size = range.size() as i64;
    if !(0..size).contains(&key) {
        bail!("key {} is out of valid range [0, {}]", key, size - 1);
    }
    Ok(key as i32)
}

fn read_ciphertext(path: &Path) -> Result<String> {
    std::fs::read_to_string(path)
        .with_context(|| format!("failed to read ciphertext file {}", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let range = CharRange::UPPERCASE;

    match cli.command {
        Command::CaesarEncrypt { key, message } => {
            let key = caesar_key(key, range)?;
            println!("{}", shift_encode(range, key, &message));
        }
        Command::CaesarDecrypt { key, message } => {
            let key = caesar_key(key, range)?;
            println!("{}", shift_decode(range, key, &message));
        }
        Command::VigenereEncrypt { key, message } => {
            let key = VigenereKey::new(&key)?;
            println!("{}", vigenere_encrypt(&key, &message));
        }
        Command::VigenereDecrypt { key, message } => {
            let key = VigenereKey::new(&key)?;
            println!("{}", vigenere_decrypt(&key, &message));
        }
        Command::CrackCaesar { ciphertext_file } => {
            let cipher_text = read_ciphertext(&ciphertext_file)?;
            let result = crack::crack_caesar(&cipher_text);
            print!("{}", Reporter::new().caesar(&result));
        }
        Command::CrackVigenere {
            ciphertext_file,
            max_key_length,
        } => {
            let cipher_text = read_ciphertext(&ciphertext_file)?;
            let result = crack::crack_vigenere(&cipher_text, max_key_length)?;
            print!("{}", Reporter::new().vigenere(&result));
            println!(
                "Valid words found: {}",
                validate::count_common_words(&result.plaintext)
            );
        }
    }

    Ok(())
}
