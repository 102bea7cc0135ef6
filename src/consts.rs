// src/consts.rs
//! Shared constants — wire parameters and defaults

/// Store key under which the login flow persists the session JWT
pub const TOKEN_STORE_KEY: &str = "atsg_jwt";

/// Literal sent in place of a missing token
// Clients without a session have always sent exactly these bytes; the
// backend answers 401 to them. Changing the literal is a wire change.
pub const MISSING_TOKEN_PLACEHOLDER: &str = "null";

/// Base URL of the API the headers are built for
pub const DEFAULT_API_BASE_URL: &str = "http://103.94.135.81:8000/api/v1";

/// OAEP overhead for SHA-1: 2 × 20-byte digest + 2
pub const OAEP_SHA1_OVERHEAD: usize = 42;

/// Decoded values at or below this length are treated as plaintext keys
// 2048-bit RSA yields 256-byte ciphertexts; real API keys decode shorter
pub const ENCRYPTED_MIN_LEN: usize = 50;

/// Default private-key location for the decrypting side
pub const DEFAULT_PRIVATE_KEY_PATH: &str = "private_key.pem";
