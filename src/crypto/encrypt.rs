// src/crypto/encrypt.rs
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use rsa::pkcs1::DecodeRsaPublicKey;
use rsa::pkcs8::DecodePublicKey;
use rsa::traits::PublicKeyParts;
use rsa::{Oaep, RsaPublicKey};
use sha1::Sha1;

use crate::consts::OAEP_SHA1_OVERHEAD;
use crate::error::CoreError;

/// Parse a PEM RSA public key — SPKI first, PKCS#1 fallback
pub fn parse_public_key(pem: &str) -> Result<RsaPublicKey, CoreError> {
    match RsaPublicKey::from_public_key_pem(pem) {
        Ok(key) => Ok(key),
        Err(err) => RsaPublicKey::from_pkcs1_pem(pem).map_err(|_| CoreError::PublicKey(err)),
    }
}

/// Largest plaintext this key can carry under OAEP-SHA1
pub fn max_plaintext_len(key: &RsaPublicKey) -> usize {
    key.size().saturating_sub(OAEP_SHA1_OVERHEAD)
}

/// Encrypt plaintext → base64 RSA-OAEP ciphertext
///
/// The OAEP bound is checked up front so oversized input fails as a clear
/// precondition instead of an opaque library error.
pub fn encrypt_with_public_key(plaintext: &str, public_key_pem: &str) -> Result<String, CoreError> {
    let key = parse_public_key(public_key_pem)?;

    let len = plaintext.len();
    let max = max_plaintext_len(&key);
    if len > max {
        return Err(CoreError::PayloadTooLarge { len, max });
    }

    let ciphertext = key
        .encrypt(
            &mut rand::thread_rng(),
            Oaep::new::<Sha1>(),
            plaintext.as_bytes(),
        )
        .map_err(CoreError::Crypto)?;

    Ok(STANDARD.encode(ciphertext))
}
