// tests/common.rs
//! Shared test utilities — logging setup and key material

use std::sync::OnceLock;

use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Call once at the start of any test that needs logs
#[allow(dead_code)] // Not every test binary pulls in both helpers
pub fn setup() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok(); // idempotent — safe to call multiple times
}

static KEYPAIR: OnceLock<(String, String)> = OnceLock::new();

/// (public PEM, private PEM) — one 2048-bit keypair per test binary
#[allow(dead_code)]
pub fn test_keypair() -> &'static (String, String) {
    KEYPAIR.get_or_init(|| {
        let private_key =
            RsaPrivateKey::new(&mut rand::thread_rng(), 2048).expect("keypair generation");
        let public_pem = private_key
            .to_public_key()
            .to_public_key_pem(LineEnding::LF)
            .expect("public PEM");
        let private_pem = private_key
            .to_pkcs8_pem(LineEnding::LF)
            .expect("private PEM")
            .to_string();
        (public_pem, private_pem)
    })
}
