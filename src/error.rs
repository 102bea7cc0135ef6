// src/error.rs
//! Public error type for the entire crate

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid public key: {0}")]
    PublicKey(rsa::pkcs8::spki::Error),

    #[error("Invalid private key: {0}")]
    PrivateKey(rsa::pkcs8::Error),

    #[error("Crypto operation failed: {0}")]
    Crypto(rsa::Error),

    #[error("Payload of {len} bytes exceeds the {max}-byte OAEP limit for this key")]
    PayloadTooLarge { len: usize, max: usize },

    #[error("Base64 decode failed: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("Decrypted payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<rsa::Error> for CoreError {
    fn from(err: rsa::Error) -> Self {
        CoreError::Crypto(err)
    }
}
