// src/api_key.rs
//! Top-level API key protection
//!
//! The key goes out in plaintext whenever anything stops encryption: empty
//! input, no key configured, crypto failure. Deployed peers rely on that
//! fallback, so it stays — but each cause is surfaced as its own outcome
//! instead of being collapsed into one string.

use tracing::{debug, warn};

use crate::config::Config;
use crate::crypto::encrypt_with_public_key;
use crate::error::CoreError;

/// What actually happened to the API key
#[derive(Debug)]
pub enum EncryptOutcome {
    /// Base64 RSA-OAEP ciphertext
    Encrypted(String),
    /// Empty or all-whitespace input — encryption never attempted
    SkippedEmpty,
    /// No public key configured
    SkippedNoKey,
    /// Key parse or encryption failed
    FailedFallback(CoreError),
}

impl EncryptOutcome {
    pub fn was_encrypted(&self) -> bool {
        matches!(self, EncryptOutcome::Encrypted(_))
    }

    /// Collapse to the transmitted string: ciphertext when encrypted, the
    /// original key on every other branch
    pub fn into_transmit_value(self, original: &str) -> String {
        match self {
            EncryptOutcome::Encrypted(ciphertext) => ciphertext,
            _ => original.to_string(),
        }
    }
}

/// Run the protection ladder and report the precise outcome
pub fn encrypt_api_key_outcome(public_key_pem: Option<&str>, api_key: &str) -> EncryptOutcome {
    if api_key.trim().is_empty() {
        debug!("empty API key, nothing to encrypt");
        return EncryptOutcome::SkippedEmpty;
    }

    let Some(pem) = public_key_pem else {
        warn!("no public key available, sending API key unencrypted");
        return EncryptOutcome::SkippedNoKey;
    };

    match encrypt_with_public_key(api_key, pem) {
        Ok(ciphertext) => EncryptOutcome::Encrypted(ciphertext),
        Err(err) => {
            warn!("sending API key unencrypted, encryption failed: {err}");
            EncryptOutcome::FailedFallback(err)
        }
    }
}

/// Compatibility surface: always returns a string to transmit, falling
/// back to the plaintext key on any failure
pub fn encrypt_api_key(config: &Config, api_key: &str) -> String {
    // Empty input short-circuits before the key is even looked up
    if api_key.trim().is_empty() {
        return api_key.to_string();
    }
    encrypt_api_key_outcome(config.public_key_pem(), api_key).into_transmit_value(api_key)
}
