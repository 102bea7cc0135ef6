// src/crypto/mod.rs
//! Thin typed wrapper over the `rsa` crate
//!
//! OAEP with SHA-1 throughout — the digest the deployed decrypting peers
//! were built against.

pub use decrypt::ApiKeyDecrypter;
pub use encrypt::{encrypt_with_public_key, max_plaintext_len, parse_public_key};

mod decrypt;
mod encrypt;
