// src/crypto/decrypt.rs
use std::fs;
use std::path::Path;

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPrivateKey;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Oaep, RsaPrivateKey};
use sha1::Sha1;
use tracing::{debug, info, warn};

use crate::consts::ENCRYPTED_MIN_LEN;
use crate::error::CoreError;

/// Receiving side — holds the RSA private key matching the configured
/// public key
pub struct ApiKeyDecrypter {
    private_key: RsaPrivateKey,
}

impl ApiKeyDecrypter {
    /// Parse a PEM private key — PKCS#8 first, PKCS#1 fallback
    pub fn from_pem(pem: &str) -> Result<Self, CoreError> {
        let private_key = match RsaPrivateKey::from_pkcs8_pem(pem) {
            Ok(key) => key,
            Err(err) => {
                RsaPrivateKey::from_pkcs1_pem(pem).map_err(|_| CoreError::PrivateKey(err))?
            }
        };
        Ok(Self { private_key })
    }

    pub fn from_pem_file(path: impl AsRef<Path>) -> Result<Self, CoreError> {
        let path = path.as_ref();
        let pem = fs::read_to_string(path)?;
        let decrypter = Self::from_pem(&pem)?;
        info!("private key loaded from {}", path.display());
        Ok(decrypter)
    }

    /// Decrypt a base64 RSA-OAEP ciphertext back to the API key
    pub fn decrypt_api_key(&self, base64_ciphertext: &str) -> Result<String, CoreError> {
        let ciphertext = STANDARD.decode(base64_ciphertext)?;
        let plaintext = self
            .private_key
            .decrypt(Oaep::new::<Sha1>(), &ciphertext)
            .map_err(CoreError::Crypto)?;
        Ok(String::from_utf8(plaintext)?)
    }

    /// Wire heuristic: does this value look like one of our ciphertexts?
    ///
    /// Ciphertexts are the modulus size (256 bytes for 2048-bit keys);
    /// plain API keys either fail strict base64 or decode far shorter.
    pub fn is_encrypted(value: &str) -> bool {
        if value.is_empty() {
            return false;
        }
        match STANDARD.decode(value) {
            Ok(decoded) => decoded.len() > ENCRYPTED_MIN_LEN,
            Err(_) => false,
        }
    }

    /// Decrypt when the value looks encrypted; hand anything else back as-is
    pub fn decrypt_if_encrypted(&self, value: &str) -> String {
        if !Self::is_encrypted(value) {
            debug!("API key looks like plaintext, passing through");
            return value.to_string();
        }
        match self.decrypt_api_key(value) {
            Ok(plaintext) => plaintext,
            Err(err) => {
                warn!("failed to decrypt API key, passing through: {err}");
                value.to_string()
            }
        }
    }
}
