// src/bin/decrypt_key.rs
//! Decrypt one base64 API key with the configured private key

use std::io::Read;

use anyhow::{Context, Result};
use credential_armor::{config, ApiKeyDecrypter};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let config = config::load();
    let decrypter = ApiKeyDecrypter::from_pem_file(&config.keys.private_key_path)
        .context("Failed to load private key — is keys.private_key_path set?")?;

    // Ciphertext from argv, else stdin
    let ciphertext = match std::env::args().nth(1) {
        Some(arg) => arg,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read ciphertext from stdin")?;
            buf.trim().to_string()
        }
    };

    if !ApiKeyDecrypter::is_encrypted(&ciphertext) {
        info!("input does not look like one of our ciphertexts — trying anyway");
    }

    let api_key = decrypter
        .decrypt_api_key(&ciphertext)
        .context("Failed to decrypt API key")?;

    info!("API key decrypted successfully");
    println!("{api_key}");
    Ok(())
}
