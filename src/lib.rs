// src/lib.rs
//! credential-armor — client credential hardening
//!
//! Features:
//! - Bearer `Authorization` headers from a persistent token store
//! - RSA-OAEP (SHA-1) protection of API keys before transmission
//! - Tagged outcomes for every plaintext-fallback branch
//! - Decrypter for the matching private key on the receiving side

pub mod api_key;
pub mod config;
pub mod consts;
pub mod crypto;
pub mod error;
pub mod headers;
pub mod store;

// Re-export everything users need at the crate root
pub use api_key::{encrypt_api_key, encrypt_api_key_outcome, EncryptOutcome};
pub use config::{load as load_config, Config};
pub use crypto::{encrypt_with_public_key, ApiKeyDecrypter};
pub use error::CoreError;
pub use headers::{auth_headers, bearer_value};
pub use store::{JsonFileStore, MemoryStore, TokenStore};
